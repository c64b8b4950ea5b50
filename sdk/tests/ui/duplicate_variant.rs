use osjson::OSDecodable;

#[derive(OSDecodable)]
#[osjson(rename_all = "lowercase")]
enum Signal {
    Stop,
    #[osjson(rename = "stop")]
    Halt,
}

fn main() {}
