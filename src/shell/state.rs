//! Tokenizer states and the pure per-character transition function.

/// Where the machine goes once an escaped character has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referrer {
    Start,
    Unquoted,
    Quoted,
}

/// Parser state of the shell tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between words. Carries no partial word.
    Start,
    /// Inside a bare word.
    Unquoted,
    /// Inside a `"..."` segment; whitespace is literal here.
    Quoted,
    /// Just saw `\`; the next character is taken literally.
    Escape(Referrer),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to record.
    None,
    /// Push the character onto the current word.
    Append(char),
    /// Finish the current word (even if empty, e.g. `""`).
    Flush,
}

pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';

/// Compute the next state for one input character.
///
/// An escape that starts a word resumes in `Unquoted`, since the escaped
/// character is the first character of that word.
pub fn transition(state: State, ch: char) -> (State, Action) {
    match state {
        State::Start => match ch {
            c if c.is_whitespace() => (State::Start, Action::None),
            QUOTE => (State::Quoted, Action::None),
            ESCAPE => (State::Escape(Referrer::Start), Action::None),
            c => (State::Unquoted, Action::Append(c)),
        },
        State::Unquoted => match ch {
            c if c.is_whitespace() => (State::Start, Action::Flush),
            QUOTE => (State::Quoted, Action::None),
            ESCAPE => (State::Escape(Referrer::Unquoted), Action::None),
            c => (State::Unquoted, Action::Append(c)),
        },
        State::Quoted => match ch {
            QUOTE => (State::Unquoted, Action::None),
            ESCAPE => (State::Escape(Referrer::Quoted), Action::None),
            c => (State::Quoted, Action::Append(c)),
        },
        State::Escape(referrer) => {
            let resume = match referrer {
                Referrer::Start | Referrer::Unquoted => State::Unquoted,
                Referrer::Quoted => State::Quoted,
            };
            (resume, Action::Append(ch))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_skips_whitespace() {
        assert_eq!(transition(State::Start, ' '), (State::Start, Action::None));
        assert_eq!(transition(State::Start, '\t'), (State::Start, Action::None));
    }

    #[test]
    fn test_quote_keeps_word_open() {
        assert_eq!(transition(State::Unquoted, '"'), (State::Quoted, Action::None));
        assert_eq!(transition(State::Quoted, '"'), (State::Unquoted, Action::None));
    }

    #[test]
    fn test_whitespace_is_literal_inside_quotes() {
        assert_eq!(
            transition(State::Quoted, ' '),
            (State::Quoted, Action::Append(' '))
        );
    }

    #[test]
    fn test_escape_returns_to_referrer() {
        assert_eq!(
            transition(State::Escape(Referrer::Quoted), '"'),
            (State::Quoted, Action::Append('"'))
        );
        assert_eq!(
            transition(State::Escape(Referrer::Unquoted), ' '),
            (State::Unquoted, Action::Append(' '))
        );
        assert_eq!(
            transition(State::Escape(Referrer::Start), '\\'),
            (State::Unquoted, Action::Append('\\'))
        );
    }
}
