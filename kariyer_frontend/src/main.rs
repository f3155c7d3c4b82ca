fn main() -> anyhow::Result<()> {
    env_logger::init();
    kariyer_frontend::run_frontend()
}
