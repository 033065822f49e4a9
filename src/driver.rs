//! File driver: scans declaration files and assembles one generated unit.

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::binder::bind;
use crate::common::emit_common;
use crate::config::{DIRECTIVE_KEYWORD, GenConfig};
use crate::directive::Directive;
use crate::emit::emit_method;
use crate::error::{DirectiveError, GenError, GenResult};
use crate::format::format_unit;

/// Location used for errors in the prologue and common methods.
const CONFIG_LOCATION: &str = "<config>";

/// One declaration file, already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name used in provenance labels and error locations.
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load a declaration file.
    pub fn read(path: &Path) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }
}

/// Generates wrapper units for one default type.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenConfig,
}

impl Generator {
    pub fn new(config: GenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// `foo.rs` → `foo.wrap.rs`.
    pub fn output_path(input: &Path) -> GenResult<PathBuf> {
        check_extension(input)?;
        Ok(input.with_extension("wrap.rs"))
    }

    /// Generate the formatted unit for in-memory sources, in order.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn generate(&self, sources: &[SourceFile]) -> GenResult<String> {
        if sources.is_empty() {
            return Err(GenError::NoInputs);
        }

        let mut unit = self.prologue()?;
        unit.extend(
            emit_common(&self.config)
                .map_err(|err| GenError::directive(CONFIG_LOCATION, err))?,
        );

        let mut methods = 0;
        for source in sources {
            #[cfg(feature = "profiling")]
            profiling::scope!("scan", source.name.as_str());

            methods += self.scan(source, &mut unit)?;
        }
        debug!(methods, files = sources.len(), "assembled unit");

        #[cfg(feature = "profiling")]
        profiling::scope!("format");

        format_unit(unit)
    }

    /// Read `paths` and generate their unit. The first path must be a `.rs`
    /// file; later ones are read whatever their extension.
    pub fn generate_files<P: AsRef<Path>>(&self, paths: &[P]) -> GenResult<String> {
        let first = paths.first().ok_or(GenError::NoInputs)?;
        check_extension(first.as_ref())?;
        let sources = paths
            .iter()
            .map(|path| SourceFile::read(path.as_ref()))
            .collect::<GenResult<Vec<_>>>()?;
        self.generate(&sources)
    }

    /// Generate from `inputs` into the default output path of the first one.
    pub fn run<P: AsRef<Path>>(&self, inputs: &[P]) -> GenResult<PathBuf> {
        let first = inputs.first().ok_or(GenError::NoInputs)?;
        let output = Self::output_path(first.as_ref())?;
        self.run_to(inputs, &output)?;
        Ok(output)
    }

    /// Generate from `inputs` into `output`. Nothing is written on failure.
    pub fn run_to<P: AsRef<Path>>(&self, inputs: &[P], output: &Path) -> GenResult<()> {
        let code = self.generate_files(inputs)?;
        fs::write(output, code).map_err(|source| GenError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        info!(output = %output.display(), "wrote wrappers");
        Ok(())
    }

    /// Emit a method for every directive in `source`, returning how many.
    fn scan(&self, source: &SourceFile, unit: &mut TokenStream) -> GenResult<usize> {
        let mut docs: Vec<String> = Vec::new();
        let mut count = 0;

        for (index, line) in source.text.lines().enumerate() {
            if !line.starts_with("//") {
                docs.clear();
                continue;
            }

            if line.split_whitespace().next() == Some(DIRECTIVE_KEYWORD) {
                let label = format!("{}:{}", source.name, index + 1);
                debug!(%label, "directive");
                let method = self
                    .process(line, &docs, &label)
                    .map_err(|err| GenError::directive(label, err))?;
                unit.extend(method);
                count += 1;
            }
            docs.push(line.to_string());
        }

        Ok(count)
    }

    fn process(&self, line: &str, docs: &[String], label: &str) -> Result<TokenStream, DirectiveError> {
        let directive = Directive::parse(line, &self.config)?;
        let bound = bind(&directive, &self.config)?;
        emit_method(&bound, trim_blank_tail(docs), Some(label), &self.config)
    }

    /// Link directive and the imports every unit relies on.
    fn prologue(&self) -> GenResult<TokenStream> {
        let link = &self.config.link_name;
        let runtime = parse_path(&self.config.runtime_path)?;
        let sys = parse_path(&self.config.sys_path)?;

        Ok(quote! {
            #[link(name = #link)]
            unsafe extern "C" {}

            #[allow(unused_imports)]
            use #runtime::prelude::*;
            #[allow(unused_imports)]
            use #sys::*;
        })
    }
}

/// Drop a trailing blank comment line.
fn trim_blank_tail(docs: &[String]) -> &[String] {
    match docs.split_last() {
        Some((last, rest)) if last == "//" || last == "///" => rest,
        _ => docs,
    }
}

fn parse_path(path: &str) -> GenResult<syn::Path> {
    syn::parse_str::<syn::Path>(path).map_err(|err| {
        GenError::directive(CONFIG_LOCATION, DirectiveError::invalid("path", path, err))
    })
}

fn check_extension(path: &Path) -> GenResult<()> {
    if path.extension().is_some_and(|ext| ext == "rs") {
        Ok(())
    } else {
        Err(GenError::NotRustFile(path.to_path_buf()))
    }
}
