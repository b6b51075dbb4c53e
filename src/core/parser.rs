//! Permissive delimited-field tokenizer for catalog lines.

/// Splits one line into trimmed fields.
///
/// Quoted segments may contain the delimiter, and a doubled quote inside a
/// quoted segment yields one literal quote. An unterminated quote is not an
/// error: the rest of the line becomes part of the last field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParser {
    delimiter: char,
    quote: char,
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new(',', '"')
    }
}

impl FieldParser {
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current_field = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == self.quote {
                    // 引號內的 "" 代表一個字面引號
                    if chars.peek() == Some(&self.quote) {
                        current_field.push(self.quote);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    current_field.push(ch);
                }
            } else if ch == self.quote {
                in_quotes = true;
            } else if ch == self.delimiter {
                fields.push(std::mem::take(&mut current_field));
            } else {
                current_field.push(ch);
            }
        }

        fields.push(current_field);

        fields
            .into_iter()
            .map(|field| field.trim().to_string())
            .collect()
    }
}
