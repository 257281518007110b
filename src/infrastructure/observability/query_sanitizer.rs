const MAX_VISIBLE_CHARS: usize = 80;

const SECRET_PREFIXES: [&str; 4] = ["api_key=", "password=", "secret=", "token="];

/// Shortens free text for log output and masks credential-shaped words.
pub fn sanitize_query(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total} chars total)")
    } else {
        trimmed.to_string()
    };

    redact(&visible)
}

fn redact(text: &str) -> String {
    let mut after_bearer = false;
    text.split(' ')
        .map(|word| {
            if after_bearer && !word.is_empty() {
                after_bearer = false;
                return "[REDACTED]".to_string();
            }
            after_bearer = word.eq_ignore_ascii_case("bearer");

            match SECRET_PREFIXES.iter().find(|prefix| {
                word.get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            }) {
                Some(prefix) => format!("{}[REDACTED]", &word[..prefix.len()]),
                None => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
