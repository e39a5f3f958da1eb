//! Validação de CPF (dígitos verificadores + lista de sequências conhecidas).

/// Sequências que passam no cálculo dos dígitos verificadores mas não
/// correspondem a pessoa nenhuma: todos os dígitos repetidos e valores
/// sequenciais famosos de teste. Lista ilustrativa; ajustar conforme a
/// necessidade do produto.
const KNOWN_INVALID: &[&str] = &[
    "00000000000",
    "11111111111",
    "22222222222",
    "33333333333",
    "44444444444",
    "55555555555",
    "66666666666",
    "77777777777",
    "88888888888",
    "99999999999",
    "12345678909",
    "01234567890",
];

/// Mantém apenas os dígitos de um CPF digitado livre ("529.982.247-25").
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_valid(input: &str) -> bool {
    let digits = normalize(input);
    if digits.len() != 11 {
        return false;
    }
    if KNOWN_INVALID.contains(&digits.as_str()) {
        return false;
    }
    let nums: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    check_digit(&nums[..9]) == nums[9] && check_digit(&nums[..10]) == nums[10]
}

/// Soma ponderada com peso inicial `len + 1` (10..=2 para o primeiro dígito
/// verificador, 11..=2 para o segundo); resto 10 ou 11 vira 0.
fn check_digit(nums: &[u32]) -> u32 {
    let start = (nums.len() + 1) as u32;
    let sum: u32 = nums
        .iter()
        .zip((2..=start).rev())
        .map(|(n, weight)| n * weight)
        .sum();
    let rest = (sum * 10) % 11;
    if rest >= 10 {
        0
    } else {
        rest
    }
}
