fn main() -> anyhow::Result<()> {
    expense_tracker_frontend::run()
}
