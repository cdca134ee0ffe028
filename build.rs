use clap::CommandFactory;
use clap_mangen::Man;
use std::path::Path;

#[path = "src/cli.rs"]
mod cli;

fn render(cmd: clap::Command, out: &Path) -> std::io::Result<()> {
    let mut buffer: Vec<u8> = Default::default();
    Man::new(cmd).render(&mut buffer)?;
    std::fs::write(out, buffer)
}

fn main() -> std::io::Result<()> {
    let out_dir =
        std::path::PathBuf::from(std::env::var_os("OUT_DIR").ok_or(std::io::ErrorKind::NotFound)?);
    let cmd = cli::Cli::command();

    // One page per subcommand, named like git's: filelog-console.1
    for sub in cmd.get_subcommands() {
        let page = format!("filelog-{}.1", sub.get_name());
        render(sub.clone(), &out_dir.join(page))?;
    }

    render(cmd, &out_dir.join("filelog.1"))?;

    Ok(())
}
