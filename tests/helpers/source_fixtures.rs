//! Common scenario fixtures for tests.

pub const LOGIN: &str = r#"
```mermaid
sequenceDiagram
    actor u AS (User)
    participant s AS (System)

    u ->> s : login
    s -->> u : session token
```
"#;

pub const LOOP_CONTINUATION: &str = r#"
```mermaid
sequenceDiagram
    participant a AS A
    participant b AS B
    participant c AS C
    a->>b:m1
    loop L
        b->>c:m2
    end
    c->>a:m3
```
"#;

pub const CHECKOUT: &str = r#"
```mermaid
sequenceDiagram
    actor customer AS Customer
    actor clerk AS (Clerk)
    participant shop AS (Web Shop)
    participant pay AS Payment Provider

    customer ->> shop : open cart
    loop for each item
        shop ->> shop : check stock
    end
    alt paid online
        shop ->> pay : request payment
        pay -->> shop : confirmation
    else paid in store
        customer ->> clerk : hand over cash
        clerk ->> shop : record payment
    end
    shop -->> customer : receipt
```
"#;

pub const UNKNOWN_ENTITY: &str = r#"
```mermaid
sequenceDiagram
    actor u AS (User)
    u ->> ghost : boo
```
"#;

pub const UNTERMINATED_LOOP: &str = r#"
```mermaid
sequenceDiagram
    actor u AS (User)
    participant s AS (System)
    loop forever
        u ->> s : ping
```
"#;
