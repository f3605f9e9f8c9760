//! Fixed-width catalog lines assembled from column offsets.

pub(crate) struct BscLine<'a> {
    pub id: u32,
    pub name: &'a str,
    pub ra: (u32, u32, f64),
    pub dec: (char, u32, u32, u32),
    pub mag: f64,
    pub spectral: &'a str,
}

impl Default for BscLine<'_> {
    fn default() -> Self {
        Self {
            id: 15,
            name: " 21Alp And",
            ra: (0, 8, 23.3),
            dec: ('+', 29, 5, 26),
            mag: 2.06,
            spectral: "B8",
        }
    }
}

fn put(buf: &mut [u8], start: usize, text: &str) {
    buf[start..start + text.len()].copy_from_slice(text.as_bytes());
}

pub(crate) fn bsc_line(fields: &BscLine<'_>) -> String {
    let mut buf = vec![b' '; 131];
    put(&mut buf, 0, &format!("{:>4}", fields.id));
    put(&mut buf, 4, &format!("{:<10.10}", fields.name));
    let (h, m, s) = fields.ra;
    put(&mut buf, 75, &format!("{:02}{:02}{:04.1}", h, m, s));
    let (sign, d, dm, ds) = fields.dec;
    put(&mut buf, 83, &format!("{}{:02}{:02}{:02}", sign, d, dm, ds));
    put(&mut buf, 102, &format!("{:>5.2}", fields.mag));
    put(&mut buf, 129, &format!("{:<2.2}", fields.spectral));
    String::from_utf8(buf).unwrap()
}
