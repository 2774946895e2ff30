/// 입력 위젯이 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Pressure,
}

impl QuantityKind {
    /// 기준 단위 기호.
    pub fn canonical_symbol(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "K",
            QuantityKind::Pressure => "MPa",
        }
    }
}
