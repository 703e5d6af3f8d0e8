#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropOperation {
    None,
    Copy,
    Move,
    Link,
}

/// The file set carried by one drag gesture. `None` covers both a missing
/// data transfer and an empty file list; transferring it still clears the
/// input's selection.
#[derive(Clone, Debug, Default)]
pub enum DropData {
    #[default]
    None,
    #[cfg(not(target_arch = "wasm32"))]
    Files(Vec<std::path::PathBuf>),
    #[cfg(target_arch = "wasm32")]
    Files(Vec<web_sys::File>),
}

impl DropData {
    pub fn len(&self) -> usize {
        match self {
            DropData::None => 0,
            DropData::Files(files) => files.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn file_names(&self) -> Vec<String> {
        match self {
            DropData::None => Vec::new(),
            #[cfg(not(target_arch = "wasm32"))]
            DropData::Files(files) => files
                .iter()
                .map(|path| {
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default()
                })
                .collect(),
            #[cfg(target_arch = "wasm32")]
            DropData::Files(files) => files.iter().map(|file| file.name()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_is_empty() {
        let data = DropData::default();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert!(data.file_names().is_empty());
    }

    #[test]
    fn file_names_strip_directories() {
        let data = DropData::Files(vec![
            PathBuf::from("/tmp/uploads/a.txt"),
            PathBuf::from("b.png"),
        ]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.file_names(), vec!["a.txt", "b.png"]);
    }
}
