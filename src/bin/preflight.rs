use flatfile_blog_api::infra::{config, logging};
use flatfile_blog_api::{BlogPost, JsonFileStore, User};
use tracing::{error, info, warn};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Loads both collection files and reports their record counts.\n\
         Reads env vars (or .env):\n\
           USERS_FILE (default users.json), BLOGS_FILE (default blogs.json), PORT\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if invalid)
    let addr = config::bind_addr()?;
    let users = JsonFileStore::<User>::new(config::users_file());
    let blogs = JsonFileStore::<BlogPost>::new(config::blogs_file());

    info!("Preflight:");
    info!("  bind address: {}", addr);

    let mut failed = false;

    match users.load().await {
        Ok(records) => info!("  {}: {} users", users.path().display(), records.len()),
        Err(e) => {
            error!("  {}: {}", users.path().display(), e);
            failed = true;
        }
    }

    match blogs.load().await {
        Ok(records) => {
            info!("  {}: {} blog posts", blogs.path().display(), records.len());
            if let Some(last) = records.last() {
                match BlogPost::next_id(&records) {
                    Some(next) => info!("  next blog id: {}", next),
                    None => {
                        error!("  last post has id {}; no id is left for a new post", last.id);
                        failed = true;
                    }
                }
                let max = records.iter().map(|b| b.id).max().unwrap_or(last.id);
                if max > last.id {
                    warn!(
                        "  last post has id {} but the highest id is {}; new ids may collide",
                        last.id,
                        max
                    );
                }
            }
        }
        Err(e) => {
            error!("  {}: {}", blogs.path().display(), e);
            failed = true;
        }
    }

    if failed {
        return Err(anyhow::anyhow!("Preflight failed: see the errors above"));
    }

    info!("Preflight OK.");
    Ok(())
}
