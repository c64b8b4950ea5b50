use osjson::OSDecodable;

#[derive(OSDecodable)]
struct Pair(f64, f64);

fn main() {}
