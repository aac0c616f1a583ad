use anyhow::Result;
use edgarparse::parsing::header::detect_submission_type;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "parse-filing",
    about = "Convert a raw EDGAR submission into normalized JSON"
)]
struct Opt {
    /// Raw submission file to parse
    #[structopt(parse(from_os_str))]
    input: std::path::PathBuf,

    /// Source URL recorded in the output envelope
    #[structopt(long, default_value = "")]
    url: String,

    /// Form type code; detected from the header when omitted
    #[structopt(long)]
    form_type: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let text = std::fs::read_to_string(&opt.input)?;
    let form_code = opt
        .form_type
        .or_else(|| detect_submission_type(&text))
        .unwrap_or_default();

    match edgarparse::parse_filing(&text, &opt.url, &form_code) {
        Ok(parsed) => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error parsing filing: {}", e);
            std::process::exit(1);
        }
    }
}
