use anyhow::{bail, Context, Result};
use policy_qna_rank::utils::logging;
use policy_qna_rank::{App, Config, PageOptions};

const USAGE: &str = "Usage: policy_qna_rank <keyword> [--from YYYYMMDD] [--to YYYYMMDD] [--page-size N]";

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = PageOptions::default().with_page_size(config.default_page_size);
    let (keyword, options) = parse_args(&args, defaults)?;

    let app = App::initialize(config).context("初始化失败")?;
    let best = app.run(&keyword, &options).await?;

    println!("{}", serde_json::to_string_pretty(&best)?);

    Ok(())
}

fn parse_args(args: &[String], mut options: PageOptions) -> Result<(String, PageOptions)> {
    let mut keyword: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--from" | "--to" | "--page-size") => {
                let value = args
                    .get(i + 1)
                    .with_context(|| format!("{} 缺少参数值\n{}", flag, USAGE))?;
                match flag {
                    "--from" => options.reg_from = value.clone(),
                    "--to" => options.reg_to = value.clone(),
                    _ => {
                        options.record_count_per_page = value
                            .parse()
                            .with_context(|| format!("无效的 --page-size: {}", value))?
                    }
                }
                i += 2;
            }
            other => {
                if keyword.is_some() {
                    bail!("多余的参数: {}\n{}", other, USAGE);
                }
                keyword = Some(other.to_string());
                i += 1;
            }
        }
    }

    let keyword = keyword.with_context(|| USAGE.to_string())?;
    Ok((keyword, options))
}
