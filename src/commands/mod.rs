use clap::Args;
use serde_json::{json, Map, Value};
use std::io::Read;
use std::path::Path;

pub type CmdResult<T> = ocgen::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Shared arguments for commands that accept a JSON spec.
///
/// Allows arbitrary `--key value` pairs that map directly to JSON keys.
/// Flag names become JSON keys with no case conversion.
///
/// # Combining --json with dynamic flags
///
/// When using both `--json` and dynamic `--key value` flags, add an
/// explicit `--` separator before the dynamic flags:
///
/// ```sh
/// ocgen config set --json '{"extensionType":"payment"}' -- --name "My Pay"
/// ```
#[derive(Args, Default, Debug)]
pub struct DynamicSetArgs {
    /// JSON spec (positional, supports @file and - for stdin)
    pub spec: Option<String>,

    /// Explicit JSON spec (takes precedence over positional)
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,

    /// Dynamic key=value flags (e.g., --name "My Module").
    /// When combined with --json, add '--' separator first:
    /// `ocgen config set --json '{}' -- --key value`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl DynamicSetArgs {
    /// Get the JSON spec from either --json or positional argument
    pub fn json_spec(&self) -> Option<&str> {
        self.json.as_deref().or(self.spec.as_deref())
    }
}

// ============================================================================
// JSON Input Parsing (CLI layer)
// ============================================================================

/// Parse --key value pairs into a JSON object.
fn parse_kv_flags(extra: &[String]) -> ocgen::Result<Value> {
    let mut obj = Map::new();
    let mut iter = extra.iter().peekable();

    while let Some(arg) = iter.next() {
        if let Some(key) = arg.strip_prefix("--") {
            let value = iter.next().ok_or_else(|| {
                ocgen::Error::validation_invalid_argument(
                    key,
                    format!("Missing value for flag --{}", key),
                    None,
                )
            })?;
            let parsed = parse_value(value);
            obj.insert(key.to_string(), parsed);
        }
    }

    Ok(Value::Object(obj))
}

/// Parse a string value into appropriate JSON type.
/// Order: JSON literal → bool → number → string
fn parse_value(s: &str) -> Value {
    // Try JSON first (handles arrays, objects, quoted strings)
    if let Ok(v) = serde_json::from_str(s) {
        return v;
    }
    // Try bool
    if s == "true" {
        return json!(true);
    }
    if s == "false" {
        return json!(false);
    }
    // Try number
    if let Ok(n) = s.parse::<i64>() {
        return json!(n);
    }
    if let Ok(n) = s.parse::<f64>() {
        return json!(n);
    }
    // Default to string
    json!(s)
}

/// Read JSON spec from string, file (@path), or stdin (-).
fn read_json_spec_to_string(spec: &str) -> ocgen::Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(ocgen::Error::validation_invalid_argument(
                "json",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
            ));
        }
        stdin.read_to_string(&mut buf).map_err(|e| {
            ocgen::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(ocgen::Error::validation_invalid_argument(
                "json",
                "Invalid JSON spec '@' (missing file path)",
                None,
            ));
        }
        return std::fs::read_to_string(Path::new(path)).map_err(|e| {
            ocgen::Error::internal_io(e.to_string(), Some(format!("read {}", path)))
        });
    }

    Ok(spec.to_string())
}

/// Merge JSON spec with --key value flags. Flags override spec values.
pub fn merge_json_sources(spec: Option<&str>, extra: &[String]) -> ocgen::Result<Value> {
    let mut base = if let Some(spec) = spec {
        let raw = read_json_spec_to_string(spec)?;
        serde_json::from_str(&raw).map_err(|e| {
            ocgen::Error::validation_invalid_json(
                e,
                Some(raw.chars().take(200).collect::<String>()),
            )
        })?
    } else {
        Value::Object(Map::new())
    };

    if !extra.is_empty() {
        let flags = parse_kv_flags(extra)?;
        if let (Value::Object(base_obj), Value::Object(flags_obj)) = (&mut base, flags) {
            for (k, v) in flags_obj {
                base_obj.insert(k, v);
            }
        }
    }

    Ok(base)
}

pub mod config;
pub mod field;
pub mod generate;
pub mod preview;
pub mod tree;

pub(crate) fn run_markdown(
    command: crate::Commands,
    _global: &GlobalArgs,
) -> ocgen::Result<(String, i32)> {
    match command {
        crate::Commands::Preview(args) => preview::run_markdown(args),
        crate::Commands::Tree(args) => tree::run_markdown(args),
        _ => Err(ocgen::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support raw output",
            None,
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (ocgen::Result<serde_json::Value>, i32) {
    crate::tty::status("ocgen is working...");

    match command {
        crate::Commands::Config(args) => dispatch!(args, global, config),
        crate::Commands::Field(args) => dispatch!(args, global, field),
        crate::Commands::Tree(args) => dispatch!(args, global, tree),
        crate::Commands::Preview(args) => dispatch!(args, global, preview),
        crate::Commands::Generate(args) => dispatch!(args, global, generate),

        // Special case: List uses raw output mode
        crate::Commands::List => {
            let err = ocgen::Error::validation_invalid_argument(
                "output_mode",
                "List command uses raw output mode",
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
