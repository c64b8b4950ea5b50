use osjson::OSDecodable;

#[derive(OSDecodable)]
#[osjson(rename_all = "snake_case")]
enum Reading {
    Label(String),
    Count(u32),
}

fn main() {}
