/// Размер тела ответа для лога запросов: "512 B", "1.5 KB", "2.0 MB"
pub fn format_bytes(n: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let n_f = n as f64;
    if n_f < KB {
        format!("{} B", n)
    } else if n_f < MB {
        format!("{:.1} KB", n_f / KB)
    } else {
        format!("{:.1} MB", n_f / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
