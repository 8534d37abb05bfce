use crate::kind::IdentifierKind;

pub const COUNTRY_PREFIX: &str = "PL";

/// Produces the canonical form of a raw identifier.
///
/// This never fails. Input that cannot be normalized meaningfully is returned in
/// a form that the format check will reject.
pub fn normalize(raw: &str, kind: IdentifierKind) -> String {
    match kind {
        IdentifierKind::IdNumber => remove_whitespace(&raw.to_ascii_uppercase()),
        IdentifierKind::Pesel | IdentifierKind::Regon => raw.to_string(),
        IdentifierKind::Nip => {
            let upper = raw.to_ascii_uppercase();
            let without_prefix = upper.strip_prefix(COUNTRY_PREFIX).unwrap_or(&upper);
            without_prefix
                .chars()
                .filter(|c| *c != '-' && !c.is_whitespace())
                .collect()
        }
        IdentifierKind::Nrb => {
            // Both the prefixed and the bare form end up with exactly one "PL" in front.
            let upper = raw.to_ascii_uppercase().replace(COUNTRY_PREFIX, "");
            let mut canonical = String::with_capacity(upper.len() + COUNTRY_PREFIX.len());
            canonical.push_str(COUNTRY_PREFIX);
            canonical.extend(upper.chars().filter(|c| !c.is_whitespace()));
            canonical
        }
        IdentifierKind::Passport => raw.to_ascii_uppercase(),
    }
}

fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Numeric code of an identifier character: digits keep their value and ASCII
/// letters map to their zero-based alphabet rank plus 10 (`A` is 10, `Z` is 35).
#[inline]
pub fn char_code(c: char) -> Option<u32> {
    if c.is_ascii_alphanumeric() {
        c.to_digit(36)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_number_is_uppercased_without_spaces() {
        assert_eq!(normalize("abc 123456", IdentifierKind::IdNumber), "ABC123456");
        assert_eq!(normalize("AbC123456", IdentifierKind::IdNumber), "ABC123456");
    }

    #[test]
    fn digit_only_kinds_are_left_untouched() {
        assert_eq!(normalize(" 44051401458", IdentifierKind::Pesel), " 44051401458");
        assert_eq!(normalize("123456785", IdentifierKind::Regon), "123456785");
    }

    #[test]
    fn nip_separators_and_prefix_are_removed() {
        for raw in [
            "1234563218",
            "PL1234563218",
            "pl1234563218",
            "123-456-32-18",
            "PL123-456-32-18",
            "123 456 32 18",
            "PL123 456 32 18",
            "PL 123-456-32-18",
        ] {
            assert_eq!(normalize(raw, IdentifierKind::Nip), "1234563218", "{raw}");
        }
    }

    #[test]
    fn nrb_always_gets_the_country_prefix() {
        let expected = "PL61109010140000071219812874";
        for raw in [
            "61109010140000071219812874",
            "PL61109010140000071219812874",
            "pl61 1090 1014 0000 0712 1981 2874",
            "61 1090 1014 0000 0712 1981 2874",
        ] {
            assert_eq!(normalize(raw, IdentifierKind::Nrb), expected, "{raw}");
        }
    }

    #[test]
    fn passport_is_uppercased() {
        assert_eq!(normalize("ab1234562", IdentifierKind::Passport), "AB1234562");
    }

    #[test]
    fn char_codes() {
        assert_eq!(char_code('0'), Some(0));
        assert_eq!(char_code('9'), Some(9));
        assert_eq!(char_code('A'), Some(10));
        assert_eq!(char_code('b'), Some(11));
        assert_eq!(char_code('Z'), Some(35));
        assert_eq!(char_code('-'), None);
        assert_eq!(char_code('Ż'), None);
    }
}
