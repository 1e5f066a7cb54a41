//! Wave chat-message parsing.
//!
//! The host emits "Wave: 3" at wave start and "Wave 3 completed" on clear.
//! The patterns are scanned anywhere in the line since messages can arrive
//! wrapped in formatting tags; anything else is ignored rather than treated
//! as an error.

use memchr::memmem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveMessage {
    Started(u8),
    Completed(u8),
}

/// Parse a game message into a wave signal, if it is one.
pub fn parse_wave_message(message: &str) -> Option<WaveMessage> {
    let bytes = message.as_bytes();

    if let Some(pos) = memmem::find(bytes, b"Wave: ")
        && let Some((wave, _)) = read_number(&bytes[pos + 6..])
    {
        return Some(WaveMessage::Started(wave));
    }

    if let Some(pos) = memmem::find(bytes, b"Wave ") {
        let rest = &bytes[pos + 5..];
        if let Some((wave, len)) = read_number(rest)
            && rest[len..].starts_with(b" completed")
        {
            return Some(WaveMessage::Completed(wave));
        }
    }

    None
}

fn read_number(bytes: &[u8]) -> Option<(u8, usize)> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 || len > 3 {
        return None;
    }

    let value: u32 = std::str::from_utf8(&bytes[..len]).ok()?.parse().ok()?;
    u8::try_from(value).ok().map(|wave| (wave, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_start() {
        assert_eq!(parse_wave_message("Wave: 1"), Some(WaveMessage::Started(1)));
        assert_eq!(parse_wave_message("Wave: 12"), Some(WaveMessage::Started(12)));
    }

    #[test]
    fn wave_start_embedded_in_tags() {
        assert_eq!(
            parse_wave_message("<col=ef1020>Wave: 7</col>"),
            Some(WaveMessage::Started(7))
        );
    }

    #[test]
    fn wave_completed() {
        assert_eq!(
            parse_wave_message("Wave 7 completed! Wave duration: 0:39"),
            Some(WaveMessage::Completed(7))
        );
    }

    #[test]
    fn non_wave_lines_ignored() {
        assert_eq!(parse_wave_message("You open the gates."), None);
        assert_eq!(parse_wave_message("Wave incoming"), None);
        assert_eq!(parse_wave_message("Wave 7 complete"), None);
        assert_eq!(parse_wave_message("Wave: soon"), None);
        assert_eq!(parse_wave_message(""), None);
    }
}
