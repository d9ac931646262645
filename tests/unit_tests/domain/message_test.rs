use documiner::domain::{ChatMessage, MessageRole};

#[test]
fn given_bot_role_when_parsing_then_maps_to_assistant() {
    assert_eq!("Bot".parse::<MessageRole>().unwrap(), MessageRole::Assistant);
    assert_eq!("user".parse::<MessageRole>().unwrap(), MessageRole::User);
    assert!("system".parse::<MessageRole>().is_err());
}

#[test]
fn given_browser_transcript_when_deserializing_then_accepts_bot_sender() {
    let message: ChatMessage =
        serde_json::from_str(r#"{"sender":"bot","text":"Hi there"}"#).unwrap();

    assert_eq!(message.sender, MessageRole::Assistant);
    assert!(!message.sender.is_user());
    assert!(!message.is_loading);
}

#[test]
fn given_roles_when_labelling_then_uses_dialog_headings() {
    assert_eq!(MessageRole::User.display_name(), "You");
    assert_eq!(MessageRole::Assistant.display_name(), "DocuMiner AI");
}

#[test]
fn given_pending_message_when_serializing_then_flags_loading() {
    let json = serde_json::to_value(ChatMessage::pending()).unwrap();

    assert_eq!(json["sender"], "assistant");
    assert_eq!(json["isLoading"], true);
}

#[test]
fn given_settled_message_when_serializing_then_omits_loading_flag() {
    let json = serde_json::to_value(ChatMessage::user("hello")).unwrap();

    assert_eq!(json["sender"], "user");
    assert!(json.get("isLoading").is_none());
}
