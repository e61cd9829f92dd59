/// Client platform detection

/// Architecture and OS of the machine running arkade, named the way
/// `uname -m` and `uname -s` report them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPlatform {
    pub arch: String,
    pub os: String,
}

impl ClientPlatform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self::from_consts(std::env::consts::ARCH, std::env::consts::OS)
    }

    fn from_consts(arch: &str, os: &str) -> Self {
        let arch = match arch {
            "aarch64" => "arm64",
            "arm" => "armv7l",
            other => other,
        };
        let os = match os {
            "linux" => "Linux",
            "macos" => "Darwin",
            "windows" => "MINGW64_NT",
            other => other,
        };

        Self {
            arch: arch.to_string(),
            os: os.to_string(),
        }
    }
}
