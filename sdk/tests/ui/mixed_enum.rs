use osjson::OSDecodable;

#[derive(OSDecodable)]
enum Reading {
    Empty,
    Label(String),
}

fn main() {}
