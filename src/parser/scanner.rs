//! Block boundary scanning.
//!
//! Both scans take the block starting at its opener line (`loop …` or
//! `alt …`), skip that line, and walk the rest with a depth counter: nested
//! `alt`/`loop` lines increase it and `end` lines decrease it. The block ends
//! at the first `end` seen at depth zero. Returned indices are relative to the
//! slice passed in.

use crate::base::Keyword;

use super::error::ParseError;

/// Find the index of the `end` that closes the block opened by `lines[0]`.
///
/// Depth-zero `else` lines are not treated specially.
///
/// # Example
/// ```
/// use scenario::parser::find_block_end;
///
/// let lines = ["loop A", "loop B", "x ->> y : msg", "end", "end"];
/// assert_eq!(find_block_end(&lines), Ok(4));
/// ```
pub fn find_block_end<S: AsRef<str>>(lines: &[S]) -> Result<usize, ParseError> {
    scan(lines, Keyword::Loop, |_| {})
}

/// Find every depth-zero `else` of the `alt` block opened by `lines[0]`,
/// followed by the index of its closing `end`.
///
/// The result always has at least one element; its last element is the
/// closing `end`.
pub fn find_branch_boundaries<S: AsRef<str>>(lines: &[S]) -> Result<Vec<usize>, ParseError> {
    let mut boundaries = Vec::new();
    let end = scan(lines, Keyword::Alt, |index| boundaries.push(index))?;
    boundaries.push(end);
    Ok(boundaries)
}

/// Walk `lines[1..]`, calling `on_else` for each depth-zero `else`, and
/// return the index of the depth-zero `end`.
fn scan<S: AsRef<str>>(
    lines: &[S],
    fallback: Keyword,
    mut on_else: impl FnMut(usize),
) -> Result<usize, ParseError> {
    let mut depth = 0usize;

    for (index, line) in lines.iter().enumerate().skip(1) {
        match Keyword::of_line(line.as_ref()) {
            Some(Keyword::End) if depth == 0 => {
                tracing::trace!("block end at offset {index}");
                return Ok(index);
            }
            Some(Keyword::End) => depth -= 1,
            Some(Keyword::Else) if depth == 0 => on_else(index),
            Some(keyword) if keyword.opens_block() => depth += 1,
            _ => {}
        }
    }

    let keyword = lines
        .first()
        .and_then(|line| Keyword::of_line(line.as_ref()))
        .filter(|keyword| keyword.opens_block())
        .unwrap_or(fallback);
    Err(ParseError::UnterminatedBlock {
        line_no: 1,
        keyword,
    })
}
