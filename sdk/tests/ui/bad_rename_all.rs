use osjson::OSDecodable;

#[derive(OSDecodable)]
#[osjson(rename_all = "Title Case")]
struct Point {
    name: String,
}

fn main() {}
