use clap::Parser;
use linked_list::SinglyLinkedList;

/// Builds a list by appending consecutive integers and prints the result.
#[derive(Parser, Debug)]
#[command(about = "Append values to a singly linked list")]
struct CmdOptions {
    /// "Number of values to append"
    #[arg(short, long, default_value = "3")]
    count: usize,
    /// "First value appended; each following value is one larger"
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    start: i64,
}

/// Appends `count` consecutive values beginning at `start`, stopping early at `i64::MAX`.
fn build_list(start: i64, count: usize) -> SinglyLinkedList<i64> {
    let mut list = SinglyLinkedList::new();
    for value in (start..=i64::MAX).take(count) {
        list.add(value);
        log::debug!("added {}", value);
    }
    list
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    let list = build_list(options.start, options.count);
    log::info!("built a list of {} values", list.get_size());

    println!("list:{}", list);
    println!("list size: {}", list.get_size());
    match (list.head(), list.tail()) {
        (Some(head), Some(tail)) => println!("head: {}, tail: {}", head, tail),
        _ => println!("the list is empty"),
    }
}
