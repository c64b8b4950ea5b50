use osjson::OSDecodable;

#[derive(OSDecodable)]
struct Point {
    #[osjson(flatten)]
    name: String,
}

fn main() {}
