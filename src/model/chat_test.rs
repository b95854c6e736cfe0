use super::*;

fn session_with_draft(draft: &str) -> ChatSession {
    let mut session = ChatSession::default();
    session.set_draft(draft.to_string());
    session
}

#[test]
fn starts_with_greeting() {
    let session = ChatSession::default();
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript()[0].role, ChatRole::Assistant);
    assert_eq!(session.transcript()[0].content, GREETING);
    assert!(!session.is_typing());
}

#[test]
fn blank_drafts_are_not_sent() {
    for draft in ["", "   ", "\n\t "] {
        let mut session = session_with_draft(draft);
        assert!(session.send().is_none());
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_typing());
    }
}

#[test]
fn send_appends_user_message_and_sets_typing() {
    let mut session = session_with_draft("question");
    let pending = session.send().unwrap();

    assert_eq!(pending.prompt, "question");
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.transcript()[1].role, ChatRole::User);
    assert_eq!(session.transcript()[1].content, "question");
    assert!(session.is_typing());
    assert_eq!(session.draft(), "");
}

#[test]
fn send_keeps_raw_text() {
    let mut session = session_with_draft("  my head hurts ");
    let pending = session.send().unwrap();
    assert_eq!(pending.prompt, "  my head hurts ");
}

#[test]
fn second_send_while_typing_is_rejected() {
    let mut session = session_with_draft("first");
    session.send().unwrap();
    session.set_draft("second".into());

    assert!(!session.can_send());
    assert!(session.send().is_none());
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.draft(), "second");
}

#[test]
fn successful_reply_appends_assistant_message() {
    let mut session = session_with_draft("question");
    session.send().unwrap();
    assert!(session.receive(Ok("Hello".into())));

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, ChatRole::User);
    assert_eq!(transcript[2].role, ChatRole::Assistant);
    assert_eq!(transcript[2].content, "Hello");
    assert!(!session.is_typing());
}

#[test]
fn empty_reply_uses_fallback() {
    let mut session = session_with_draft("question");
    session.send().unwrap();
    session.receive(Ok(String::new()));

    assert_eq!(session.transcript()[2].content, EMPTY_REPLY_FALLBACK);
    assert!(!session.is_typing());
}

#[test]
fn whitespace_reply_is_kept_verbatim() {
    let mut session = session_with_draft("question");
    session.send().unwrap();
    session.receive(Ok("  \n".into()));

    assert_eq!(session.transcript()[2].content, "  \n");
    assert!(!session.is_typing());
}

#[test]
fn failed_reply_appends_disclaimer_error() {
    let mut session = session_with_draft("question");
    session.send().unwrap();
    session.receive(Err(AssistantError::ApiRequest("offline".into())));

    assert_eq!(session.transcript().len(), 3);
    assert!(session.transcript()[2]
        .content
        .starts_with("DISCLAIMER: I am an AI, not a doctor."));
    assert!(!session.is_typing());
}

#[test]
fn reply_without_outstanding_prompt_is_dropped() {
    let mut session = ChatSession::default();
    assert!(!session.receive(Ok("unsolicited".into())));
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn messages_keep_send_order_and_unique_ids() {
    let mut session = ChatSession::default();
    for prompt in ["one", "two", "three"] {
        session.set_draft(prompt.into());
        session.send().unwrap();
        session.receive(Ok(format!("re: {prompt}")));
    }

    let contents: Vec<&str> = session
        .transcript()
        .iter()
        .skip(1)
        .map(|message| message.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec!["one", "re: one", "two", "re: two", "three", "re: three"]
    );

    let mut ids: Vec<_> = session.transcript().iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), session.transcript().len());
}

#[test]
fn disclaimer_lines_are_flagged() {
    let mut session = session_with_draft("q");
    session.send().unwrap();
    session.receive(Ok("DISCLAIMER: not a doctor.\nDrink water.\n".into()));

    let lines: Vec<(&str, bool)> = session.transcript()[2].lines().collect();
    assert_eq!(
        lines,
        vec![
            ("DISCLAIMER: not a doctor.", true),
            ("Drink water.", false),
            ("", false),
        ]
    );
}
