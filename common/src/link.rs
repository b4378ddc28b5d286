//! Public links and QR code URLs.
//!
//! Every inspection is reachable without authentication at
//! `{base}/public/inspection/{id}-{slug}`, where the slug is derived from the
//! equipment reference. Only the leading id is authoritative: the slug part is
//! cosmetic and may go stale when the reference is edited, in which case the
//! server redirects to the canonical form.

use url::Url;

/// Path prefix of the public viewer.
pub const PUBLIC_PATH: &str = "/public/inspection";

/// Lowercases `reference`, folds accented Latin letters to ASCII and joins the
/// remaining alphanumeric runs with single dashes.
pub fn slugify(reference: &str) -> String {
    let mut slug = String::with_capacity(reference.len());
    let mut pending_dash = false;

    for ch in reference.chars().flat_map(char::to_lowercase) {
        let piece = if ch.is_ascii_alphanumeric() {
            Some(ch.to_string())
        } else {
            fold_accent(ch).map(str::to_string)
        };
        match piece {
            Some(piece) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push_str(&piece);
            }
            None => pending_dash = true,
        }
    }
    slug
}

fn fold_accent(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => "a",
        'ç' => "c",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'î' | 'ï' | 'í' | 'ì' => "i",
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' => "o",
        'ù' | 'û' | 'ü' | 'ú' => "u",
        'ÿ' | 'ý' => "y",
        'ñ' => "n",
        'œ' => "oe",
        'æ' => "ae",
        _ => return None,
    };
    Some(folded)
}

/// `"{id}-{slug}"`, or just the id when the reference has no usable character.
pub fn public_slug(id: i64, reference: &str) -> String {
    let slug = slugify(reference);
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{}-{}", id, slug)
    }
}

/// Extracts the inspection id from a public slug.
pub fn parse_public_slug(slug: &str) -> Option<i64> {
    let head = slug.split('-').next()?;
    if head.is_empty() || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

/// Absolute public URL of an inspection.
pub fn public_url(base: &str, id: i64, reference: &str) -> String {
    format!(
        "{}{}/{}",
        base.trim_end_matches('/'),
        PUBLIC_PATH,
        public_slug(id, reference)
    )
}

/// URL of the remote service that renders `data` as a square QR image of
/// `size` pixels.
pub fn remote_qr_url(service: &str, data: &str, size: u32) -> Result<String, url::ParseError> {
    let dimension = format!("{}x{}", size, size);
    let url = Url::parse_with_params(
        service,
        &[("size", dimension.as_str()), ("format", "png"), ("data", data)],
    )?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_folds_accents_and_collapses_separators() {
        assert_eq!(slugify("Casque Pétzl -- Vertex  Bleu"), "casque-petzl-vertex-bleu");
        assert_eq!(slugify("  MOUSQ/42_b  "), "mousq-42-b");
        assert_eq!(slugify("Cœur d'acier"), "coeur-d-acier");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn public_slug_round_trips_the_id() {
        let slug = public_slug(128, "Harnais Avao Bod");
        assert_eq!(slug, "128-harnais-avao-bod");
        assert_eq!(parse_public_slug(&slug), Some(128));
        assert_eq!(public_slug(5, "!!"), "5");
        assert_eq!(parse_public_slug("5"), Some(5));
    }

    #[test]
    fn parse_public_slug_rejects_non_numeric_heads() {
        assert_eq!(parse_public_slug("abc-12"), None);
        assert_eq!(parse_public_slug("-12"), None);
        assert_eq!(parse_public_slug(""), None);
    }

    #[test]
    fn public_url_ignores_trailing_slash_on_base() {
        assert_eq!(
            public_url("https://epi.example.org/", 3, "Vertex"),
            "https://epi.example.org/public/inspection/3-vertex"
        );
    }

    #[test]
    fn remote_qr_url_encodes_the_payload() {
        let url = remote_qr_url(
            "https://api.qrserver.com/v1/create-qr-code/",
            "https://epi.example.org/public/inspection/3-vertex?a=b&c",
            300,
        )
        .unwrap();
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=300x300"));
        assert!(url.contains("data=https%3A%2F%2Fepi.example.org%2Fpublic%2Finspection%2F3-vertex%3Fa%3Db%26c"));
        assert!(remote_qr_url("not a url", "x", 10).is_err());
    }
}
