use super::SelectError;

/// One comma-separated unit of a page selector string.
///
/// All page references in the selector syntax are one-based; expansion
/// produces zero-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorToken {
    /// `all`: every page of the document, in order.
    All,
    /// An arithmetic progression over one-based page numbers, e.g. `2n-1`.
    /// Multiplication only applies when a coefficient was written out;
    /// a bare `n` walks the pages unchanged.
    Linear {
        coefficient: Option<i64>,
        constant: Option<i64>,
    },
    /// `start-end`, one-based inclusive. The end is clamped to the page
    /// count at expansion time.
    Range { start: i64, end: i64 },
    /// A single one-based page number.
    Page(i64),
}

/// Expand a page selector like `"1-3,5,2n"` into zero-based page indices.
///
/// Order and duplicates are preserved: `"3,1,1"` yields `[2, 0, 0]`. Indices
/// beyond the document are only produced by literal page numbers; callers
/// feeding a copy step run [`super::check_page_bounds`] over the result.
pub fn parse_selector(selector: &str, total_pages: u32) -> Result<Vec<u32>, SelectError> {
    let tokens = tokenize(selector)?;
    Ok(tokens
        .iter()
        .flat_map(|token| expand(token, total_pages))
        .collect())
}

/// Split a selector into classified tokens without expanding them.
pub fn tokenize(selector: &str) -> Result<Vec<SelectorToken>, SelectError> {
    selector
        .split(',')
        .map(|raw| parse_token(raw.trim()))
        .collect()
}

// Classification order matters: `all` wins over everything, a token
// containing `n` (or a standalone `+` shift) is a linear term even when it
// also contains `-`, and only then is `-` read as a range.
fn parse_token(token: &str) -> Result<SelectorToken, SelectError> {
    if token.eq_ignore_ascii_case("all") {
        return Ok(SelectorToken::All);
    }

    if token.contains('n') || token.starts_with('+') {
        return parse_linear(token);
    }

    if let Some(dash) = token.find('-') {
        if dash == 0 {
            return Err(SelectError::InvalidSelector(token.to_string()));
        }
        let start = parse_number(&token[..dash], token)?;
        let end = parse_number(&token[dash + 1..], token)?;
        if start < 1 {
            return Err(SelectError::InvalidSelector(token.to_string()));
        }
        return Ok(SelectorToken::Range { start, end });
    }

    let page = parse_number(token, token)?;
    if page < 1 || page > i64::from(u32::MAX) {
        return Err(SelectError::InvalidSelector(token.to_string()));
    }
    Ok(SelectorToken::Page(page))
}

fn parse_linear(token: &str) -> Result<SelectorToken, SelectError> {
    if let Some((before, after)) = token.split_once('n') {
        if after.contains('n') {
            return Err(SelectError::InvalidSelector(token.to_string()));
        }
        let coefficient = if before.is_empty() {
            None
        } else {
            Some(parse_number(before, token)?)
        };
        let constant = if after.is_empty() {
            None
        } else {
            Some(parse_number(after, token)?)
        };
        Ok(SelectorToken::Linear {
            coefficient,
            constant,
        })
    } else {
        // A standalone `+k` shifts every page number by k.
        let constant = parse_number(&token[1..], token)?;
        Ok(SelectorToken::Linear {
            coefficient: None,
            constant: Some(constant),
        })
    }
}

fn parse_number(segment: &str, token: &str) -> Result<i64, SelectError> {
    segment
        .trim()
        .parse::<i64>()
        .map_err(|_| SelectError::InvalidSelector(token.to_string()))
}

fn expand(token: &SelectorToken, total_pages: u32) -> Vec<u32> {
    let total = i64::from(total_pages);
    match token {
        SelectorToken::All => (0..total_pages).collect(),
        SelectorToken::Linear {
            coefficient,
            constant,
        } => {
            let mut pages = Vec::new();
            for i in 1..=total {
                let candidate = match coefficient {
                    Some(a) => a.saturating_mul(i),
                    None => i,
                }
                .saturating_add(constant.unwrap_or(0));
                if candidate >= 1 && candidate <= total {
                    pages.push((candidate - 1) as u32);
                }
            }
            pages
        }
        SelectorToken::Range { start, end } => {
            let end = (*end).min(total);
            (*start..=end).map(|page| (page - 1) as u32).collect()
        }
        SelectorToken::Page(page) => vec![(*page - 1) as u32],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_every_page() {
        assert_eq!(parse_selector("all", 4).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_all_is_case_insensitive() {
        assert_eq!(parse_selector("ALL", 2).unwrap(), vec![0, 1]);
        assert_eq!(parse_selector("All", 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(parse_selector("5", 10).unwrap(), vec![4]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(parse_selector("3,1,1", 10).unwrap(), vec![2, 0, 0]);
    }

    #[test]
    fn test_range() {
        assert_eq!(parse_selector("1-3", 10).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_range_end_clamped() {
        assert_eq!(
            parse_selector("1-20", 10).unwrap(),
            (0..10).collect::<Vec<u32>>()
        );
    }

    #[test]
    fn test_range_past_document_is_empty() {
        // Start beyond the clamped end expands to nothing.
        assert_eq!(parse_selector("12-15", 10).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_range_reversed_is_empty() {
        assert_eq!(parse_selector("5-3", 10).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_linear_with_coefficient() {
        assert_eq!(parse_selector("2n-1", 10).unwrap(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_linear_identity() {
        // No written-out coefficient, so `n` walks the pages unchanged.
        assert_eq!(parse_selector("n", 5).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_linear_coefficient_only() {
        assert_eq!(parse_selector("3n", 10).unwrap(), vec![2, 5, 8]);
    }

    #[test]
    fn test_linear_even_pages() {
        assert_eq!(parse_selector("2n", 10).unwrap(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_linear_constant_after_n() {
        assert_eq!(parse_selector("n+2", 5).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn test_linear_negative_constant() {
        assert_eq!(parse_selector("n-1", 5).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_standalone_plus_shift() {
        assert_eq!(parse_selector("+2", 5).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn test_mixed_tokens() {
        assert_eq!(
            parse_selector("1-3,5,2n", 6).unwrap(),
            vec![0, 1, 2, 4, 1, 3, 5]
        );
    }

    #[test]
    fn test_whitespace_around_tokens() {
        assert_eq!(parse_selector(" 1 , 3 ", 10).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_parse_does_not_bounds_check_literals() {
        // Bounds are the extraction step's job; the parser just expands.
        assert_eq!(parse_selector("15", 10).unwrap(), vec![14]);
    }

    #[test]
    fn test_non_numeric_token_is_rejected() {
        assert_eq!(
            parse_selector("abc", 10),
            Err(SelectError::InvalidSelector("abc".to_string()))
        );
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(parse_selector("1,,2", 10).is_err());
        assert!(parse_selector("", 10).is_err());
    }

    #[test]
    fn test_leading_dash_is_rejected() {
        assert!(parse_selector("-5", 10).is_err());
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(parse_selector("0", 10).is_err());
        assert!(parse_selector("0-2", 10).is_err());
    }

    #[test]
    fn test_absurd_page_number_rejected() {
        assert!(parse_selector("5000000000", 10).is_err());
    }

    #[test]
    fn test_malformed_range_is_rejected() {
        assert!(parse_selector("1-2-3", 10).is_err());
    }

    #[test]
    fn test_bad_linear_segments_are_rejected() {
        assert!(parse_selector("xn+1", 10).is_err());
        assert!(parse_selector("2n+x", 10).is_err());
        assert!(parse_selector("2+n", 10).is_err());
    }

    #[test]
    fn test_tokenize_classification() {
        assert_eq!(
            tokenize("all,2n-1,1-3,7").unwrap(),
            vec![
                SelectorToken::All,
                SelectorToken::Linear {
                    coefficient: Some(2),
                    constant: Some(-1),
                },
                SelectorToken::Range { start: 1, end: 3 },
                SelectorToken::Page(7),
            ]
        );
    }

    #[test]
    fn test_huge_coefficient_does_not_panic() {
        assert_eq!(
            parse_selector("9223372036854775807n", 10).unwrap(),
            Vec::<u32>::new()
        );
    }
}
