//! Sugestões de profissão durante a digitação.

/// Vocabulário fixo oferecido no campo de profissão. Só sugestão: o campo
/// aceita qualquer texto.
const PROFISSOES: &[&str] = &[
    "Administrador(a)",
    "Advogado(a)",
    "Analista de sistemas",
    "Arquiteto(a)",
    "Atendente",
    "Autônomo(a)",
    "Contador(a)",
    "Dentista",
    "Desenvolvedor(a)",
    "Designer",
    "Empresário(a)",
    "Enfermeiro(a)",
    "Engenheiro(a)",
    "Estudante",
    "Farmacêutico(a)",
    "Fisioterapeuta",
    "Fotógrafo(a)",
    "Jornalista",
    "Médico(a)",
    "Motorista",
    "Nutricionista",
    "Pedagogo(a)",
    "Professor(a)",
    "Psicólogo(a)",
    "Publicitário(a)",
    "Representante comercial",
    "Servidor(a) público(a)",
    "Técnico(a) de enfermagem",
    "Vendedor(a)",
];

const MIN_QUERY_CHARS: usize = 2;
const MAX_SUGGESTIONS: usize = 5;

/// Filtro por substring, sem diferenciar maiúsculas; no máximo cinco
/// resultados e lista vazia para consultas com menos de dois caracteres.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    PROFISSOES
        .iter()
        .filter(|p| p.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_returns_nothing() {
        assert!(suggest("").is_empty());
        assert!(suggest("p").is_empty());
        assert!(suggest(" p ").is_empty());
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert_eq!(suggest("ps"), vec!["Psicólogo(a)"]);
        assert_eq!(suggest("PSIC"), vec!["Psicólogo(a)"]);
        assert!(suggest("enferm").contains(&"Enfermeiro(a)"));
        assert!(suggest("enferm").contains(&"Técnico(a) de enfermagem"));
    }

    #[test]
    fn test_at_most_five_results() {
        // "or" aparece em mais de cinco profissões do vocabulário
        assert_eq!(suggest("or").len(), 5);
    }

    #[test]
    fn test_unknown_query_returns_empty() {
        assert!(suggest("zzz").is_empty());
    }
}
