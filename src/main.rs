use anyhow::Result;

fn main() -> Result<()> {
    anycard_icon::writer::write()
}
