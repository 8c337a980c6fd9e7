use std::collections::HashMap;

pub struct CliOptions {
    pub width: u32,
    pub height: u32,
    pub use_multi_thread: bool,
    pub scene_name: String,
    pub output: String,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            width: 480,
            height: 270,
            use_multi_thread: true,
            scene_name: String::from("blocks"),
            output: String::from("output.png"),
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --width <pixels> --height <pixels>
        --use_multi_thread | --use_single_thread
        --scene_name <blocks | square | shapes>
        --output <file.png>
        --help
        "#
    }
}

fn parse_size(key: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", key))?;
    value
        .parse::<u32>()
        .map_err(|e| format!("Invalid value {} for {}: {}", value, key, e))
}

fn require(key: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("Missing value for {}", key))
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--width" => options.width = parse_size(&k, v)?,
            "--height" => options.height = parse_size(&k, v)?,
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--scene_name" => options.scene_name = require(&k, v)?,
            "--output" => options.output = require(&k, v)?,
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod test {
    use super::parse_args;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(args("wraytrace")).unwrap();
        assert_eq!((options.width, options.height), (480, 270));
        assert_eq!(options.scene_name, "blocks");
        assert_eq!(options.output, "output.png");
        assert!(options.use_multi_thread);
        assert!(!options.show_help);
    }

    #[test]
    fn test_all_keys() {
        let options = parse_args(args(
            "wraytrace --width 64 --scene_name square --use_single_thread --height 48 --output a.png",
        ))
        .unwrap();
        assert_eq!((options.width, options.height), (64, 48));
        assert_eq!(options.scene_name, "square");
        assert_eq!(options.output, "a.png");
        assert!(!options.use_multi_thread);

        assert!(parse_args(args("wraytrace --help")).unwrap().show_help);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args("wraytrace --width")).is_err());
        assert!(parse_args(args("wraytrace --width wide")).is_err());
        assert!(parse_args(args("wraytrace --height -3")).is_err());
        assert!(parse_args(args("wraytrace --output")).is_err());
        assert!(parse_args(args("wraytrace --scene_name blocks extra")).is_err());
        assert!(parse_args(args("wraytrace --samples 4")).is_err());
    }
}
