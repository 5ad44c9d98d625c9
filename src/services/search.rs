// src/services/search.rs
//
// Primitivas da camada de busca: casamento por substring sem
// distinção de maiúsculas, refeito por inteiro a cada consulta.

/// Normaliza a consulta digitada: apara espaços e baixa a caixa.
/// Consulta vazia vira `None` (filtro identidade).
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    let q = query?.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// `needle` já deve estar em caixa baixa (saída de `normalize_query`).
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulta_vazia_vira_identidade() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some("")), None);
        assert_eq!(normalize_query(Some("   ")), None);
    }

    #[test]
    fn normaliza_caixa_e_espacos() {
        assert_eq!(normalize_query(Some("  TechSoft ")), Some("techsoft".to_string()));
    }

    #[test]
    fn casamento_ignora_caixa() {
        assert!(contains_ci("Manutenção Mensal", "mensal"));
        assert!(contains_ci("DSN-WEB-001", "dsn-web"));
        assert!(!contains_ci("Design de Website", "app"));
    }
}
