use std::fmt;

/// Host platform buckets. Everything that is neither Windows nor macOS is
/// treated as a Linux/Unix host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Classifies the platform this process runs on.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classifies an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Other => "linux/unix",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_known_identifiers() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Other);
    }

    #[test]
    fn test_from_os_unknown_falls_back_to_other() {
        assert_eq!(Platform::from_os("freebsd"), Platform::Other);
        assert_eq!(Platform::from_os("haiku"), Platform::Other);
        assert_eq!(Platform::from_os(""), Platform::Other);
    }

    #[test]
    fn test_detect_matches_build_target() {
        let expected = if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        };
        assert_eq!(Platform::detect(), expected);
    }
}
