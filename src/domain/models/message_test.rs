use super::Author;
use super::BotAnswer;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Luch, "Hi there!");
    assert_eq!(msg.author, Author::Luch);
    assert_eq!(msg.author.to_string(), "Luch");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Bot, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Luch, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Luch);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_splits_reasoning_from_answer() {
    let answer = BotAnswer::parse("<think>X</think>Y");
    assert_eq!(answer.reasoning, Some("X".to_string()));
    assert_eq!(answer.text, "Y");
}

#[test]
fn it_trims_reasoning_and_answer() {
    let answer = BotAnswer::parse("Before \n<think>\n  step one\n  step two\n</think>\n\nAfter");
    assert_eq!(answer.reasoning, Some("step one\n  step two".to_string()));
    assert_eq!(answer.text, "Before \n\n\nAfter");
}

#[test]
fn it_keeps_answers_without_reasoning() {
    let answer = BotAnswer::parse("  Just an answer ");
    assert_eq!(answer.reasoning, None);
    assert_eq!(answer.text, "Just an answer");
}

#[test]
fn it_ignores_unterminated_reasoning() {
    let answer = BotAnswer::parse("<think>never closed");
    assert_eq!(answer.reasoning, None);
    assert_eq!(answer.text, "<think>never closed");
}

#[test]
fn it_drops_empty_reasoning_blocks() {
    let answer = BotAnswer::parse("<think>  </think>Y");
    assert_eq!(answer.reasoning, None);
    assert_eq!(answer.text, "Y");
}

#[test]
fn it_only_extracts_the_first_block() {
    let answer = BotAnswer::parse("<think>A</think>B<think>C</think>");
    assert_eq!(answer.reasoning, Some("A".to_string()));
    assert_eq!(answer.text, "B<think>C</think>");
}

#[test]
fn it_builds_reasoning_before_answer() {
    let messages = BotAnswer::parse("<think>X</think>Y").into_messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message_type(), MessageType::Reasoning);
    assert_eq!(messages[0].text, "X");
    assert_eq!(messages[1].message_type(), MessageType::Normal);
    assert_eq!(messages[1].text, "Y");
}

#[test]
fn it_skips_empty_answers() {
    let messages = BotAnswer::parse("<think>only thoughts</think>").into_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message_type(), MessageType::Reasoning);
}
