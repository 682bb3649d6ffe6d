use super::{Dependency, DependencyQuery};
use std::process::{Command, Stdio};

/// Metadata read from a `pkg-config` compatible tool.
///
/// Guile installs one `.pc` file per parallel version (`guile-3.0`,
/// `guile-2.2`, ...), and each exports `guile` and `guild` variables
/// naming its executables.
#[derive(Debug, Clone)]
pub struct PkgConfig {
    binary: String,
}

impl PkgConfig {
    /// Use `binary` (a name on `PATH` or a path) as the pkg-config tool.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// `PKG_CONFIG` from the environment, then `fallback`.
    pub fn from_env(fallback: Option<&str>) -> Self {
        let binary = std::env::var("PKG_CONFIG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| "pkg-config".to_string());
        Self::new(binary)
    }

    /// `pkg-config --exists <package>`.
    fn exists(&self, package: &str) -> bool {
        // A pkg-config that cannot be spawned is treated as "package unknown".
        Command::new(&self.binary)
            .args(["--exists", package])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self::from_env(None)
    }
}

struct PkgConfigPackage<'a> {
    tool: &'a PkgConfig,
    package: String,
}

impl Dependency for PkgConfigPackage<'_> {
    fn variable(&self, key: &str) -> Option<String> {
        let output = Command::new(&self.tool.binary)
            .arg(format!("--variable={key}"))
            .arg(&self.package)
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }
        parse_variable(&output.stdout)
    }
}

impl DependencyQuery for PkgConfig {
    fn query(&self, package: &str) -> Option<Box<dyn Dependency + '_>> {
        if !self.exists(package) {
            return None;
        }
        Some(Box::new(PkgConfigPackage {
            tool: self,
            package: package.to_string(),
        }))
    }

    fn describe(&self) -> String {
        format!("pkg-config ({})", self.binary)
    }
}

fn parse_variable(stdout: &[u8]) -> Option<String> {
    let value = String::from_utf8_lossy(stdout).trim_end().to_string();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_output_is_trimmed() {
        assert_eq!(
            parse_variable(b"/usr/bin/guile\n").as_deref(),
            Some("/usr/bin/guile")
        );
        assert_eq!(parse_variable(b"\n"), None);
        assert_eq!(parse_variable(b""), None);
    }

    #[test]
    fn unspawnable_tool_finds_nothing() {
        let tool = PkgConfig::new("guile-locate-no-such-pkg-config-77a2");
        assert!(tool.query("guile-3.0").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn reads_variables_from_tool_output() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let fake = dir.path().join("pkg-config");
        std::fs::write(
            &fake,
            "#!/bin/sh\n\
             case \"$1\" in\n\
               --exists) [ \"$2\" = guile-3.0 ] ;;\n\
               --variable=guile) echo /opt/guile/bin/guile ;;\n\
               --variable=guild) echo ;;\n\
               *) exit 1 ;;\n\
             esac\n",
        )
        .expect("write fake pkg-config");
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).expect("chmod");

        let tool = PkgConfig::new(fake.to_string_lossy().into_owned());
        assert!(tool.query("guile-2.2").is_none());

        let dep = tool.query("guile-3.0").expect("fake knows guile-3.0");
        assert_eq!(dep.variable("guile").as_deref(), Some("/opt/guile/bin/guile"));
        assert_eq!(dep.variable("guild"), None);
        assert_eq!(dep.variable("prefix"), None);
    }
}
