// Message assembly: C-style format-string filling plus value stringification.

use serde_json::Value;

use crate::errors::Result;

type CharIter<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Human-readable form of a value: strings render raw, everything else as
/// its compact structural encoding.
pub fn display(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => encode(other),
    }
}

/// Compact structural (JSON) encoding. Strings keep their quotes here.
pub fn encode(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Join a variadic argument list into a single message. If the first
/// argument is a string containing format specifiers, subsequent arguments
/// fill them in; leftover arguments are appended space-separated. Otherwise
/// all arguments are space-joined in display form.
pub fn format_message(args: &[Value]) -> Result<String> {
    match args.split_first() {
        None => Ok(String::new()),
        Some((Value::String(template), rest)) if has_specifier(template) => {
            fill(template, rest)
        }
        Some(_) => join_displayed(args),
    }
}

fn join_displayed(args: &[Value]) -> Result<String> {
    let parts = args.iter().map(display).collect::<Result<Vec<_>>>()?;
    Ok(parts.join(" "))
}

fn has_specifier(template: &str) -> bool {
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' && matches!(chars.peek(), Some('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) {
            return true;
        }
    }
    false
}

fn fill(template: &str, args: &[Value]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars: CharIter<'_> = template.chars().peekable();
    let mut next = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) if next < args.len() => {
                chars.next();
                out.push_str(&substitute(spec, &args[next])?);
                next += 1;
            }
            // Unknown specifier, or no argument left: keep the '%' literal.
            _ => out.push('%'),
        }
    }

    for arg in &args[next..] {
        out.push(' ');
        out.push_str(&display(arg)?);
    }
    Ok(out)
}

fn substitute(spec: char, value: &Value) -> Result<String> {
    match spec {
        's' => display(value),
        'd' | 'i' => Ok(as_integer(value)),
        'f' => Ok(as_float(value)),
        'j' | 'o' | 'O' => encode(value),
        _ => unreachable!("caller filters specifiers"),
    }
}

fn as_integer(value: &Value) -> String {
    match value.as_f64() {
        Some(n) => format!("{}", n.trunc()),
        None => "NaN".to_string(),
    }
}

fn as_float(value: &Value) -> String {
    match value.as_f64() {
        Some(n) => format!("{n}"),
        None => "NaN".to_string(),
    }
}
