//! Brace-depth indentation pass

/// Result of [`indent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indented {
    /// The re-indented text
    pub text: String,
    /// Nesting level left open at the end of the text
    pub depth: usize,
    /// Number of closing braces seen while the level was already zero
    pub clipped: usize,
}

/// Re-indents `text` by walking it character by character.
///
/// Every newline is followed by `width` spaces per nesting level:
/// - a newline right after `{` opens a level before indenting;
/// - a newline right before `}` closes a level before indenting;
/// - any other newline keeps the current level.
///
/// A closing newline at level zero is dropped together with its
/// indentation and the level stays at zero, so unbalanced input never
/// yields a negative depth.
pub fn indent(text: &str, width: usize) -> Indented {
    let chars: Vec<char> = text.chars().collect();
    let unit = " ".repeat(width);

    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut clipped = 0usize;

    for (i, &ch) in chars.iter().enumerate() {
        if ch != '\n' {
            out.push(ch);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        if prev == Some('{') {
            depth += 1;
        } else if next == Some('}') {
            match depth.checked_sub(1) {
                Some(level) => depth = level,
                None => {
                    clipped += 1;
                    continue;
                }
            }
        }

        out.push('\n');
        out.push_str(&unit.repeat(depth));
    }

    Indented {
        text: out,
        depth,
        clipped,
    }
}
