use std::str::FromStr;

use rug::Integer;

use crate::{ Delta_2048, quadform::{ QuadForm, TrForm } };

fn int(s: impl AsRef<str>) -> Integer {
    Integer::from_str(s.as_ref()).unwrap()
}

#[test]
fn test_square() {
    let f = QuadForm::new(12, 5, -599).unwrap().square();
    let g = QuadForm::new(10, 1, -599).unwrap();
    assert_eq!(f, g);

    let f = QuadForm::new(12, -5, -599).unwrap().square();
    let g = QuadForm::new(10, -1, -599).unwrap();
    assert_eq!(f, g);

    let f = QuadForm::new(13, 5, -599).unwrap().square();
    let g = QuadForm::new(10, -1, -599).unwrap();
    assert_eq!(f, g);
}

#[test]
fn test_mul() {
    let a = QuadForm::new(15, 19, -599).unwrap(); // 15, 19, 16
    let b = QuadForm::new(26, 31, -599).unwrap(); // 26, 31, 15
    let c0 = QuadForm::new(6, 1, -599).unwrap(); // 6, 1, 25
    assert_eq!(a.mul(&b), c0);
    assert_eq!(b.mul(&a), c0);

    let a = QuadForm::new(34, -43, -599).unwrap(); // 34, -43, 18
    let b = QuadForm::new(20, 59, -599).unwrap(); // 20, 59, 51
    // c0 unchanged.
    assert_eq!(a.mul(&b), c0);
    assert_eq!(b.mul(&a), c0);

    let a = QuadForm::new(787, -1919, -599).unwrap(); // 787 -1919 1170
    let b = QuadForm::new(2771, -893, -599).unwrap(); // 2771 -893 72
    let c0 = QuadForm::new(3, 1, -599).unwrap(); // 3, 1, 50
    assert_eq!(a.mul(&b), c0);
    assert_eq!(b.mul(&a), c0);
}

#[test]
fn test_compose_unreduced() {
    let f1 = QuadForm::from_abc(2, 1, 75);
    let f2 = QuadForm::from_abc(8, -3, 19);
    let f3 = f1.compose(&f2);
    assert_eq!(f3, QuadForm::from_abc(16, -19, 15));
    assert_eq!(f2.compose(&f1), f3);
    assert_eq!(f3.discriminant(), -599);
    assert!(!f3.is_normal());
    assert!(!f3.is_reduced());

    assert_eq!(f1.multiply(&f2, false), f3);
    assert_eq!(f1.multiply(&f2, true), QuadForm::from_abc(12, 11, 15));
    assert_eq!(TrForm::mul(&f1, &f2), f1.mul(&f2));
}

#[test]
fn test_normalize_small() {
    let f = QuadForm::from_abc(16, -19, 15);
    let g = f.normalize();
    assert_eq!(g, QuadForm::from_abc(16, 13, 12));
    assert!(g.is_normal());
    assert!(!g.is_reduced());
    assert_eq!(g.discriminant(), -599);

    // normal but not reduced: normalization is a no-op.
    let f = QuadForm::from_abc(24, -19, 10);
    assert!(f.is_normal());
    assert_eq!(f.normalize(), f);
    assert_eq!(f.reduce(), QuadForm::from_abc(10, -1, 15));
}

#[test]
fn test_predicates() {
    // $$-a < b \le a$$.
    assert!(QuadForm::from_abc(10, 10, 17).is_normal());
    assert!(!QuadForm::from_abc(10, -10, 17).is_normal());
    assert!(!QuadForm::from_abc(10, 11, 17).is_normal());

    // a = c requires b >= 0.
    assert!(QuadForm::from_abc(9, 7, 9).is_reduced());
    assert!(!QuadForm::from_abc(9, -7, 9).is_reduced());
    assert!(!QuadForm::from_abc(20, -11, 9).is_reduced());
    assert!(QuadForm::from_abc(9, -7, 18).is_reduced());

    let (a, b, c) = (int("24"), int("-19"), int("10"));
    assert!(<QuadForm as TrForm>::is_normal(&a, &b, &c));
    assert!(!<QuadForm as TrForm>::is_reduced(&a, &b, &c));

    assert!(QuadForm::from_abc(24, -19, 10).is_posdef());
    assert!(!QuadForm::from_abc(-24, -19, -10).is_posdef());
    assert!(!QuadForm::from_abc(1, 5, 1).is_posdef());
}

#[test]
fn test_identity_and_exp() {
    let g = QuadForm::new(2, 1, -599).unwrap();
    let id = g.identity();
    assert_eq!(id, QuadForm::from_abc(1, 1, 150));
    assert_eq!(g.exp(&Integer::from(0)), id);
    assert_eq!(g.exp(&Integer::from(5)), QuadForm::from_abc(6, -1, 25));
    // $$h(-599) = 25$$ and g generates the class group.
    assert_eq!(g.exp(&Integer::from(25)), id);
    assert_eq!(g.exp(&Integer::from(-1)), g.inv());
    assert_eq!(g.exp(&Integer::from(-7)).mul(&g.exp(&Integer::from(7))), id);

    let mut h = id.clone();
    for k in 1..60 {
        h = h.mul(&g);
        assert_eq!(g.exp(&Integer::from(k)), h);
    }

    let even = QuadForm::new(2, 2, -20).unwrap();
    assert_eq!(even.identity(), QuadForm::from_abc(1, 0, 5));
    assert_eq!(even.square(), even.identity());
}

#[test]
fn test_reduce_2048() {
    let to_reduce = QuadForm::from_abc(
        int(
            String::new() +
                "591622449216197258120089391432207181572679374270745984479112" +
                "414101314701592477848522107674496756100372887295518141911986" +
                "241641798660763521874054424965681889882724221330887550366991" +
                "453623858407722364030436647784154711966786382417857735305311" +
                "987204975806227417098805337249042201223588540680465532198634" +
                "196097774987618046254796507721237545238070019766545882259089" +
                "280223674368"
        ),
        int(
            String::new() +
                "187603510950048397551935321648566056505903066271692489641008" +
                "842956528389058281589412337386131758218492537483291023195049" +
                "584101909528202205035701139205765426769286592118075901999410" +
                "279581958953854463724442618850228006534542091014979635888098" +
                "195727035794840852789133546213713622853411382996915879532492" +
                "701884293934171321108412598131229456265154778657668960562807" +
                "2971047864713"
        ),
        int(
            String::new() +
                "148722708914328030547911757276946310957559649433583944113141" +
                "107834045777141021703797003652565996790494938248627428035900" +
                "794617126911460983974708408965600343323158582218211030767769" +
                "071232773151166323373851012040552328913614054286359720405962" +
                "054503167470120807948386912805478941282467416010887550873592" +
                "345541413469808372923423202881113971752202960986298901084593" +
                "0564341935336"
        )
    );
    let reduced_gt = QuadForm::from_abc(
        int(
            String::new() +
                "268889359618240812325971125405098245046140700597762733471368" +
                "889211154975220702870098416886629830663760190795933722965564" +
                "208484467803699188093841191247838702907788754244684979615596" +
                "438079183988609285780270380141126415298938171092408525441583" +
                "092920253211226807479899875600295310218087433131506300633770" +
                "37854944"
        ),
        int(
            String::new() +
                "145299851964819993939951543633271001844072328925595611361407" +
                "924092623288674401674808228084968539245477512983429806060341" +
                "241125798352557338247900201190785883725932882106282559566052" +
                "401717447034184260920733475843578268628137331543387371489622" +
                "126414447357170234022015691153235808145409990397220962614781" +
                "9759991"
        ),
        int(
            String::new() +
                "284672665022671275914202890071658197492314335860930614787725" +
                "604290582311378560461303844928118164569332860394689409501292" +
                "633009337238392120863993757807960416345313833429029187190734" +
                "160876144568452059802270914039642858701072689171832440166359" +
                "079268462718293746791248483884034866561564478239095738726823" +
                "372184204"
        )
    );
    assert_eq!(&to_reduce.discriminant(), Delta_2048());
    assert!(!to_reduce.is_reduced());

    let reduced = to_reduce.reduce();
    assert_eq!(reduced, reduced_gt);
    assert!(reduced.is_reduced());
    assert_eq!(reduced.reduce(), reduced_gt);
}

#[test]
fn test_normalize_2048() {
    let unnormalized = QuadForm::from_abc(
        int("16"),
        int("105"),
        int(
            String::new() +
                "478376078668867561673338398692512737742076193377579185979952" +
                "947778162500583311163253410181106720472171123774764735020601" +
                "213528425753087932376215639471576300984851315174010737751911" +
                "943195315494838983347421441386016611204764255243332731221321" +
                "519278338873239699989557133287835268541988713323133994893869" +
                "976818275783179387921709187117946848593116974397265966565015" +
                "941384497394942286170683296647767144847422761580905834957146" +
                "491938390841109871491186151583613524884884020388947996954204" +
                "832727089332397513638493972875716927368810312231404469265224" +
                "318597017389945629057462766047140854869124473221137588347335" +
                "081555186814207"
        )
    );
    let normalized_gt = QuadForm::from_abc(
        int("16"),
        int("9"),
        int(
            String::new() +
                "478376078668867561673338398692512737742076193377579185979952" +
                "947778162500583311163253410181106720472171123774764735020601" +
                "213528425753087932376215639471576300984851315174010737751911" +
                "943195315494838983347421441386016611204764255243332731221321" +
                "519278338873239699989557133287835268541988713323133994893869" +
                "976818275783179387921709187117946848593116974397265966565015" +
                "941384497394942286170683296647767144847422761580905834957146" +
                "491938390841109871491186151583613524884884020388947996954204" +
                "832727089332397513638493972875716927368810312231404469265224" +
                "318597017389945629057462766047140854869124473221137588347335" +
                "081555186814036"
        )
    );
    assert_eq!(&unnormalized.discriminant(), Delta_2048());
    assert!(!unnormalized.is_normal());

    let normalized = unnormalized.normalize();
    assert_eq!(normalized, normalized_gt);
    assert!(normalized.is_normal());
}

#[test]
fn test_text_form() {
    let f = QuadForm::from_abc(16, -19, 15);
    assert_eq!(f.to_string(), "(16, -19, 15)");
    assert_eq!(QuadForm::from_str("(16, -19, 15)").unwrap(), f);
    assert_eq!(QuadForm::from_str(" (16,-19,  15) ").unwrap(), f);

    assert!(QuadForm::from_str("(16, -19)").is_err());
    assert!(QuadForm::from_str("16, -19, 15").is_err());
    assert!(QuadForm::from_str("(16, x, 15)").is_err());
}
