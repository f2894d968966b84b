use param_strip::config::StripRule;
use param_strip::stripper::{StripPattern, transform};

const SIGNATURE: &str = "\
import java.util.UUID;

public class CategoriaAPI {
    public CategoriaResponse cadastra(@RequestHeader(\"X-User-Id\") UUID usuarioId,
            CategoriaRequest request) {
        return service.cadastra(request);
    }
}
";

fn default_pattern() -> StripPattern {
    StripPattern::compile(&StripRule::default()).unwrap()
}

#[test]
fn test_targeted_removal_is_exact() {
    // The only textual changes are the removed parameter (with its
    // line-continuation whitespace) and the now-unused import line.
    let rule = StripRule::default();
    let result = transform(SIGNATURE, &default_pattern(), &rule);

    let expected = "
public class CategoriaAPI {
    public CategoriaResponse cadastra(CategoriaRequest request) {
        return service.cadastra(request);
    }
}
";
    assert_eq!(result, expected);
}

#[test]
fn test_transformation_is_idempotent() {
    let rule = StripRule::default();
    let once = transform(SIGNATURE, &default_pattern(), &rule);
    let twice = transform(&once, &default_pattern(), &rule);
    assert_eq!(once, twice, "A second pass must not change the content");
}

#[test]
fn test_import_retained_when_type_used_elsewhere() {
    let rule = StripRule::default();
    let content = "\
import java.util.UUID;

public class PedidoAPI {
    public PedidoResponse busca(@RequestHeader(\"X-User-Id\") UUID usuarioId,
            Long id) {
        return service.busca(id);
    }

    public PedidoResponse porIdentificador(UUID identificador) {
        return service.porIdentificador(identificador);
    }
}
";
    let result = transform(content, &default_pattern(), &rule);
    assert!(result.contains("import java.util.UUID;"));
    assert!(!result.contains("usuarioId"));
}

#[test]
fn test_import_removed_when_type_unused() {
    let rule = StripRule::default();
    let result = transform(SIGNATURE, &default_pattern(), &rule);
    assert!(!result.contains("import java.util.UUID;"));
    assert!(!result.contains("UUID"));
}

#[test]
fn test_no_op_content_is_untouched() {
    let rule = StripRule::default();
    let content = "public class RestauranteAPI {\n}\n";
    assert_eq!(transform(content, &default_pattern(), &rule), content);
}

#[test]
fn test_every_occurrence_is_removed() {
    let rule = StripRule::default();
    let content = "\
import java.util.UUID;

public class CupomAPI {
    public void cadastra(@RequestHeader(\"X-User-Id\") UUID usuarioId,
            CupomRequest request) {
    }

    public void edita(@RequestHeader(\"X-User-Id\") UUID usuarioId,
            EditaCupomRequest request) {
    }
}
";
    let result = transform(content, &default_pattern(), &rule);
    assert!(!result.contains("usuarioId"));
    assert!(!result.contains("@RequestHeader"));
    assert!(!result.contains("import java.util.UUID;"));
    assert!(result.contains("cadastra(CupomRequest request)"));
    assert!(result.contains("edita(EditaCupomRequest request)"));
}

#[test]
fn test_custom_rule_tokens() {
    let rule = StripRule {
        annotation: "@Header(\"X-Tenant\")".to_string(),
        type_name: "TenantId".to_string(),
        parameter: "tenant".to_string(),
        import: "import com.example.TenantId;".to_string(),
    };
    let pattern = StripPattern::compile(&rule).unwrap();
    let content = "\
import com.example.TenantId;

public class Api {
    public void get(@Header(\"X-Tenant\") TenantId tenant,
            Long id) {
    }
}
";
    let result = transform(content, &pattern, &rule);
    assert!(!result.contains("tenant"));
    assert!(!result.contains("import com.example.TenantId;"));
    assert!(result.contains("get(Long id)"));
}
