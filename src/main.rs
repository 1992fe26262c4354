// ==========================================
// B-chain 补货助手 - 命令行主入口
// ==========================================

use std::process::ExitCode;

fn main() -> ExitCode {
    bchain_restock::cli::run()
}
