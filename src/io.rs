/// File access around the converter: reading Markdown, writing HTML, and settling on paths
use std::fs;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

/// Path meaning stdin for a source and stdout for a destination.
pub const STDIO_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Read a Markdown source, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if is_stdio(path) {
        return read_markdown(&mut std::io::stdin().lock());
    }
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write the converted HTML, or print it when the path is `-`.
pub fn write_output(path: &Path, html: &str) -> Result<(), IoError> {
    if is_stdio(path) {
        return write_html(&mut std::io::stdout().lock(), html);
    }

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Read all of `reader` as Markdown text.
pub fn read_markdown<R: Read>(reader: &mut R) -> Result<String, IoError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

pub fn write_html<W: Write>(writer: &mut W, html: &str) -> Result<(), IoError> {
    writer.write_all(html.as_bytes())?;
    writer.flush().map_err(IoError::Io)
}

/// Append `.{suffix}` unless the suffix already appears somewhere in the path.
///
/// `README` becomes `README.md`, while `notes.md` and `md/notes` are kept as is.
pub fn force_suffix(path: &Path, suffix: &str) -> PathBuf {
    if is_stdio(path) {
        return path.to_path_buf();
    }
    let path_str = path.to_string_lossy();
    if path_str.contains(suffix) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{}.{}", path_str, suffix))
    }
}

/// Ask for a path up to `max_attempts` times, falling back to `default`.
///
/// Blank answers and end of input both count as a failed attempt.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max_attempts: usize,
    default: &str,
) -> Result<String, IoError> {
    for _ in 0..max_attempts {
        write!(output, "{}: ", prompt)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            break;
        }
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
    Ok(default.to_string())
}

/// What to ask and what to fall back on when settling one path.
#[derive(Debug, Clone, Copy)]
pub struct PathQuery<'a> {
    pub question: &'a str,
    pub default: &'a str,
    /// Suffix forced onto whichever path wins.
    pub suffix: &'a str,
    pub attempts: usize,
}

/// Pick a path: command line, then config, then a prompt (only when `prompt` is
/// set), then the default. The suffix is forced on the result.
pub fn resolve_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    from_args: Option<PathBuf>,
    from_config: Option<PathBuf>,
    prompt: bool,
    query: &PathQuery,
) -> Result<PathBuf, IoError> {
    let path = match from_args.or(from_config) {
        Some(path) => path,
        None if prompt => PathBuf::from(prompt_path(
            input,
            output,
            query.question,
            query.attempts,
            query.default,
        )?),
        None => PathBuf::from(query.default),
    };
    Ok(force_suffix(&path, query.suffix))
}
