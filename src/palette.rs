macro_rules! c {
    ($name:ident = $value:tt) => {
        pub const $name: palette::Srgb<u8> = palette::Srgb::new(
            ($value as u32 >> 16 & 0xFF) as u8,
            ($value as u32 >> 8 & 0xFF) as u8,
            ($value as u32 & 0xFF) as u8,
        );
    };
}

c!(BLACK = 0x000000);
c!(WHITE = 0xFFFFFF);
c!(GREY = 0x888888);
c!(BLUE = 0x58C4DD);
c!(TEAL = 0x5CD0B3);
c!(GREEN = 0x83C167);
c!(YELLOW = 0xFFFF00);
c!(ORANGE = 0xFF862F);
c!(RED = 0xFC6255);
c!(PURPLE = 0x9A72AC);
