//! # Help Text
//!
//! Help message listing the bot commands.
//! Displayed to the user via the `start` and `help` commands.

pub fn main(prefix: &str) -> String {
    format!(
        concat!(
            "**🛒 Bazaar**\n",
            "Hi! I help you swap and sell things. Commands:\n",
            "\n",
            "* {p}register: Choose your display name\n",
            "* {p}newad: Post an ad\n",
            "* {p}myads: Your ads\n",
            "* {p}deletead: Delete one of your ads\n",
            "* {p}profile: Your profile\n",
            "* {p}feed: Browse ads\n",
            "* {p}review: Review another user\n",
            "* {p}cancel: Abort the current input\n",
        ),
        p = prefix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_uses_prefix() {
        let text = main("!");
        assert!(text.contains("!newad"));
        assert!(text.contains("!review"));
        assert!(!text.contains("/newad"));
    }
}
