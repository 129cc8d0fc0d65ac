use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    // Use ~/.config/djbar/ on macOS and Linux (XDG standard, avoids the
    // macOS Application Support folder for consistency).
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("djbar")
    }

    #[cfg(windows)]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("djbar")
    }
}

pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| std::env::temp_dir())
            .join(".local")
            .join("share")
            .join("djbar")
    }

    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("djbar")
    }
}

/// Program used to hand a URL to the desktop environment.
#[cfg(target_os = "macos")]
pub fn opener_program() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn opener_program() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}

#[cfg(windows)]
pub fn opener_program() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}
