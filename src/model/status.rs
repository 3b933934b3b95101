/// Known status codes with their English and Korean labels
const STATUS_LABELS: &[(&str, &str, &str)] = &[
    ("best-practice", "Best Practice", "베스트 프랙티스"),
    (
        "validated-in-production",
        "Validated in Production",
        "프로덕션 검증됨",
    ),
    ("established", "Established", "확립됨"),
    ("emerging", "Emerging", "새롭게 떠오름"),
    ("proposed", "Proposed", "제안됨"),
    (
        "experimental-but-awesome",
        "Experimental but Awesome",
        "실험적이지만 유망",
    ),
    ("rapidly-improving", "Rapidly Improving", "빠르게 개선중"),
];

/// Display label for a status code; unknown codes are returned verbatim
pub fn status_label<'a>(code: &'a str, lang: &str) -> &'a str {
    match STATUS_LABELS.iter().find(|(known, _, _)| *known == code) {
        Some((_, _, ko)) if lang == "ko" => *ko,
        Some((_, en, _)) => *en,
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_label("best-practice", "en"), "Best Practice");
        assert_eq!(status_label("best-practice", "ko"), "베스트 프랙티스");
        assert_eq!(
            status_label("validated-in-production", "ko"),
            "프로덕션 검증됨"
        );
        assert_eq!(status_label("rapidly-improving", "en"), "Rapidly Improving");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        assert_eq!(status_label("deprecated", "en"), "deprecated");
        assert_eq!(status_label("", "ko"), "");
    }

    #[test]
    fn test_other_languages_use_english() {
        assert_eq!(status_label("emerging", "ja"), "Emerging");
    }
}
