use std::path::PathBuf;

const DEFAULT_SAVE_DIR: &str = "SavedFiles";

#[derive(Debug)]
pub struct ArgsConfig {
    pub save_dir: PathBuf,
    pub file_name: Option<String>,
}

impl ArgsConfig {
    pub fn new(args: &[String]) -> Result<ArgsConfig, String> {
        let mut config = ArgsConfig {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            file_name: None,
        };

        let mut idx = 1;
        while idx < args.len() {
            match args[idx].as_str() {
                "--dir" => {
                    idx += 1;
                    let dir = args
                        .get(idx)
                        .ok_or_else(|| String::from("'--dir' expects a path"))?;
                    config.save_dir = PathBuf::from(dir);
                }
                arg => {
                    if !arg.starts_with('-') {
                        if config.file_name.is_none() {
                            config.file_name = Some(arg.to_string());
                        } else {
                            return Err(format!("Multiple filenames specified: '{}'", arg));
                        }
                    } else {
                        return Err(format!("Unknown argument: '{}'", arg));
                    }
                }
            }
            idx += 1;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("texart")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults_with_no_arguments() {
        let config = ArgsConfig::new(&args(&[])).unwrap();
        assert_eq!(config.save_dir, PathBuf::from(DEFAULT_SAVE_DIR));
        assert!(config.file_name.is_none());
    }

    #[test]
    fn positional_filename_and_dir_override() {
        let config = ArgsConfig::new(&args(&["--dir", "art", "castle"])).unwrap();
        assert_eq!(config.save_dir, PathBuf::from("art"));
        assert_eq!(config.file_name.as_deref(), Some("castle"));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_filenames() {
        assert!(ArgsConfig::new(&args(&["--huh"])).is_err());
        assert!(ArgsConfig::new(&args(&["one", "two"])).is_err());
        assert!(ArgsConfig::new(&args(&["--dir"])).is_err());
    }
}
