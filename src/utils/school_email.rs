//! 校内邮箱：first.last@domain

/// 姓名转为邮箱本地部分，只保留 ASCII 字母数字并转小写
pub fn school_email_local_part(first_name: &str, last_name: &str) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    };

    let first = clean(first_name);
    let last = clean(last_name);
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first}.{last}"),
        (false, true) => first,
        (true, false) => last,
        (true, true) => "user".to_string(),
    }
}

/// 第 `n` 个候选地址，n = 1 时不带序号，之后依次追加 2、3……
pub fn school_email_candidate(local_part: &str, domain: &str, n: u32) -> String {
    if n <= 1 {
        format!("{local_part}@{domain}")
    } else {
        format!("{local_part}{n}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_part() {
        assert_eq!(school_email_local_part("Ada", "Lovelace"), "ada.lovelace");
        assert_eq!(school_email_local_part("Jean-Luc", "O'Brien"), "jeanluc.obrien");
        assert_eq!(school_email_local_part("Zoë", "Smith"), "zo.smith");
        assert_eq!(school_email_local_part("", "Smith"), "smith");
        assert_eq!(school_email_local_part("  ", "!!"), "user");
    }

    #[test]
    fn test_candidates() {
        assert_eq!(
            school_email_candidate("ada.lovelace", "school.test", 1),
            "ada.lovelace@school.test"
        );
        assert_eq!(
            school_email_candidate("ada.lovelace", "school.test", 3),
            "ada.lovelace3@school.test"
        );
    }
}
