//! Producer/consumer example — three device readers feeding one consumer.
//!
//! Run with:
//!   cargo run --example producer-consumer

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use logbus::logging::{init_logging, LogFormat, LogLevel};
use logbus::msg::ids::{default_channel_map, CHAN_MAP, CHAN_NAME, CHAN_TSTAMP, SOURCE_TEST1};
use logbus::msg::Message;
use logbus::queue::{MsgQueue, PushError};

fn main() {
    init_logging(LogFormat::Text, LogLevel::Info);

    let queue = Arc::new(MsgQueue::new());

    let producers: Vec<_> = (0..3u8)
        .map(|unit| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || reader(unit, &queue))
        })
        .collect();

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let mut received = 0usize;
            loop {
                match queue.pop() {
                    Some(msg) => {
                        received += 1;
                        println!("{msg}");
                    }
                    None if !queue.is_valid() => break,
                    None => thread::sleep(Duration::from_millis(5)),
                }
            }
            received
        })
    };

    thread::sleep(Duration::from_millis(200));
    queue.shutdown();

    for p in producers {
        p.join().expect("producer thread should not panic");
    }
    let received = consumer.join().expect("consumer thread should not panic");
    eprintln!("consumer drained {received} messages");
}

/// A minimal device reader: announce the source, then emit readings until
/// the queue refuses them.
fn reader(unit: u8, queue: &MsgQueue) {
    let source = SOURCE_TEST1 + unit;
    let name = format!("Example Source {unit}");

    if queue
        .push(Message::new_string(source, CHAN_NAME, name.len(), name.as_bytes()))
        .is_err()
    {
        return;
    }

    let channels = default_channel_map(&["Value"]);
    if queue
        .push(Message::new_string_array(source, CHAN_MAP, &channels))
        .is_err()
    {
        return;
    }

    let mut tick = 0u32;
    loop {
        tick += 1;
        let ts = Message::new_timestamp(source, CHAN_TSTAMP, tick * 10);
        let value = Message::new_float(source, 4, f32::from(unit) + tick as f32 / 100.0);

        for msg in [ts, value] {
            match queue.push(msg) {
                Ok(()) => {}
                Err(PushError::Closed(_)) | Err(PushError::Poisoned(_)) => return,
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}
