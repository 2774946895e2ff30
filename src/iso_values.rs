//! 사용자가 플롯용으로 쌓아 가는 등값(등압/등온) 목록.

/// 기준 단위 값의 순서 보존, 중복 없는 목록.
///
/// 구독 메커니즘은 없다. 변경 후 다시 그리는 것은 호출 측 책임이다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoValueSet {
    values: Vec<f64>,
}

impl IsoValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값이 이미 있거나 유한하지 않으면 아무것도 하지 않는다. 추가되었으면 `true`.
    pub fn add(&mut self, value: f64) -> bool {
        if !value.is_finite() || self.contains(value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// 처음 일치하는 값을 지운다. 없으면 아무것도 하지 않는다.
    pub fn remove(&mut self, value: f64) -> bool {
        match self.values.iter().position(|v| *v == value) {
            Some(idx) => {
                self.values.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_keeps_one() {
        let mut set = IsoValueSet::new();
        assert!(set.add(10.0));
        assert!(!set.add(10.0));
        assert_eq!(set.values(), &[10.0]);
    }

    #[test]
    fn non_finite_values_are_refused() {
        let mut set = IsoValueSet::new();
        assert!(!set.add(f64::NAN));
        assert!(!set.add(f64::NAN));
        assert!(!set.add(f64::INFINITY));
        assert!(!set.add(f64::NEG_INFINITY));
        assert!(set.is_empty());
    }

    #[test]
    fn removing_absent_value_is_noop() {
        let mut set = IsoValueSet::new();
        set.add(1.0);
        assert!(!set.remove(2.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn order_survives_interleaved_edits() {
        let mut set = IsoValueSet::new();
        set.add(5.0);
        set.add(1.0);
        set.add(3.0);
        set.remove(1.0);
        set.add(2.0);
        set.add(5.0);
        set.add(1.0);
        assert_eq!(set.values(), &[5.0, 3.0, 2.0, 1.0]);
    }
}
