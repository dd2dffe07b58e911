pub fn run() -> anyhow::Result<()> {
    println!("moodwell {}", env!("CARGO_PKG_VERSION"));
    println!("Mood tracking and supportive chat");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
