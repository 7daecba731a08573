// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: file name {stem:?} is not a valid contract identifier", .path.display())]
    InvalidContractName { path: PathBuf, stem: String },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
