use osjson::OSDecodable;

#[derive(OSDecodable)]
#[osjson(rename_all = "camelCase")]
struct Metres(f64);

fn main() {}
