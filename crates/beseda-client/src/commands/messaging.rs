use serde::Serialize;

use beseda_shared::{ChatId, Sender};
use beseda_store::Message;

use crate::error::Result;
use crate::events::{ClientEvent, MessageSentPayload};
use crate::Client;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub chat_id: u64,
    pub text: String,
    pub sender: Sender,
    pub time: String,
}

impl From<&Message> for MessageDto {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.0,
            chat_id: m.chat_id.0,
            text: m.body.clone(),
            sender: m.sender,
            time: m.time_label.clone(),
        }
    }
}

/// Send `content` into the open chat and return the stored message.
///
/// Blank content or no open chat is rejected with
/// [`ClientError::Rejected`](crate::error::ClientError::Rejected) and leaves
/// the state untouched.
pub fn send_message(client: &Client, content: &str) -> Result<MessageDto> {
    let mut guard = client.lock()?;
    let message = guard.store.send_message(content)?;
    let dto = MessageDto::from(&message);

    client.emit(ClientEvent::MessageSent(MessageSentPayload {
        chat_id: dto.chat_id,
        message_id: dto.id,
        time: dto.time.clone(),
    }));

    Ok(dto)
}

/// Transcript of the open chat, oldest first.
pub fn get_messages(client: &Client) -> Result<Vec<MessageDto>> {
    let guard = client.lock()?;
    Ok(guard.store.current_transcript().map(MessageDto::from).collect())
}

/// Transcript of any chat, oldest first.
pub fn get_chat_messages(client: &Client, chat_id: u64) -> Result<Vec<MessageDto>> {
    let guard = client.lock()?;
    Ok(guard
        .store
        .transcript(ChatId(chat_id))
        .map(MessageDto::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use beseda_shared::FixedClock;
    use beseda_store::StoreError;

    use super::*;
    use crate::commands::chats::{list_chats, select_chat};
    use crate::commands::test_client;
    use crate::config::ClientConfig;
    use crate::error::ClientError;

    #[test]
    fn test_reply_updates_list_and_thread() {
        let (client, _) = test_client();
        let mut rx = client.subscribe();

        let sent = send_message(&client, "Привет!").unwrap();
        assert_eq!(sent.chat_id, 1);
        assert_eq!(sent.sender, Sender::SelfUser);
        assert_eq!(sent.time, "09:05");

        let thread = get_messages(&client).unwrap();
        assert_eq!(thread.len(), 4);
        assert_eq!(thread.last().unwrap(), &sent);

        let anna = &list_chats(&client).unwrap()[0];
        assert_eq!(anna.last_message, "Привет!");
        assert_eq!(anna.time, "09:05");
        assert_eq!(anna.unread, None);

        assert_eq!(
            rx.try_recv().unwrap(),
            ClientEvent::MessageSent(MessageSentPayload {
                chat_id: 1,
                message_id: sent.id,
                time: "09:05".into(),
            })
        );
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let (client, _) = test_client();
        let mut rx = client.subscribe();

        let err = send_message(&client, "   ").unwrap_err();
        assert!(matches!(err, ClientError::Rejected(StoreError::EmptyBody)));
        assert_eq!(get_messages(&client).unwrap().len(), 3);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_without_open_chat() {
        let (client, _) = test_client();
        select_chat(&client, None).unwrap();

        let err = send_message(&client, "Привет").unwrap_err();
        assert!(matches!(err, ClientError::Rejected(StoreError::NoActiveChat)));
        assert!(get_messages(&client).unwrap().is_empty());
    }

    #[test]
    fn test_get_chat_messages() {
        let (client, clock) = test_client();
        select_chat(&client, Some(2)).unwrap();
        clock.set(18, 40).unwrap();
        send_message(&client, "Получил, спасибо").unwrap();

        let thread = get_chat_messages(&client, 2).unwrap();
        let texts: Vec<_> = thread.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["Отправил файлы", "Получил, спасибо"]);
        assert_eq!(thread[1].time, "18:40");
        assert!(get_chat_messages(&client, 99).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_sends_are_announced_in_id_order() {
        let config = ClientConfig {
            event_capacity: 256,
            ..ClientConfig::default()
        };
        let client = Client::launch_with_clock(config, FixedClock::at(9, 5).unwrap()).unwrap();
        let mut rx = client.subscribe();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let client = client.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        send_message(&client, &format!("{worker}-{i}")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let ClientEvent::MessageSent(payload) = event {
                ids.push(payload.message_id);
            }
        }
        assert_eq!(ids.len(), 200);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "out of order: {ids:?}");
    }
}
