//! Static reply templates, used whenever the AI does not supply a reply.

use crate::nlp::Category;

const PRODUCTIVE_REPLY: &str = "Prezado(a),

Agradecemos seu contato. Sua solicitação foi recebida e registrada em nosso sistema.

Nossa equipe está analisando sua demanda e retornaremos com uma resposta em até 24-48 horas úteis.

Caso sua solicitação seja urgente, por favor nos informe através deste canal.

Atenciosamente,
Equipe de Suporte";

const UNPRODUCTIVE_REPLY: &str = "Prezado(a),

Agradecemos sua mensagem e suas gentis palavras.

Ficamos muito felizes com seu contato. Não é necessária nenhuma ação adicional de sua parte neste momento.

Estamos à disposição sempre que precisar.

Atenciosamente,
Equipe de Suporte";

pub fn template_reply(category: Category) -> &'static str {
    match category {
        Category::Productive => PRODUCTIVE_REPLY,
        Category::Unproductive => UNPRODUCTIVE_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_differ_by_category() {
        assert!(template_reply(Category::Productive).contains("24-48 horas úteis"));
        assert!(template_reply(Category::Unproductive).contains("Não é necessária nenhuma ação"));
    }
}
