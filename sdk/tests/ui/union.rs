use osjson::OSDecodable;

#[derive(OSDecodable)]
union Bits {
    int:   u32,
    float: f32,
}

fn main() {}
