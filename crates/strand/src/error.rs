use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} does not exist or is not a directory", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("{} does not exist or is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write bundle output")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("dependency cycle: {}", chain.join(" -> "))]
    DependencyCycle { chain: Vec<String> },
}
