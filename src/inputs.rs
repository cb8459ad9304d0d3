//! Embedded puzzle inputs.

/// Day 1 captcha digits.
pub const CAPTCHA: &str = concat!(
    "683763347952248558274598352939674972954641755898815882568823446994",
    "73595413912688278647235862566123233983921662578792917453912795352746",
    "42651264996561591958851212556718683741137117987528762148875976142962",
    "91748869722983491977224234582993231415294131913276224852494958641681",
    "81327197661454464926326248274999448373741839963155646828842752761293",
    "14235642296435534952198748321149636128966637577972834595223164945371",
    "16845391648931518118496533318459989985979911468813617172345179117598",
    "93792348815818755262456378627116779495435596139617246571678531183335",
    "95624416387144567424476558644636252915985413753596211718487519227387",
    "22228998873572923129782861826362329212525747381183475211876378296238",
    "31872437381979223955675634257889137823684924127338433248519515211796",
    "73259931492161139973657127722254633236946113627741741979486552412398",
    "97224923565368323139375974377178737875938494688367336425293785471511",
    "46397532997237439387663769334722979172954835154486382983716698212694",
    "35739815339292625527296138462613182967817121956928868559714113235532",
    "27882541639238883781555739487531854231589978777186876424464574466434",
    "22536541238979761725496426292359382168535641216124211741896552562128",
    "94182417224191387353782897617273827698391523224145158942191112156722",
    "88998539346679547862562236146215546182944671912551533952565247861597",
    "58429643756586457639177183891162214163549688595416893383194995824534",
    "24784141424752626821276195491371945211487676474579998279259475375962",
    "63343196311919178943681167388935487976611118996641383983548189311354",
    "86984944719992393148681724116616741428937687985152658296679845474766",
    "47774155363271296867917535645298745976112643721675817118239521939328",
    "91991489968137628499914846784297935786293312157969967514843757848955",
    "61682156658579887518746862371751372692472765217374791324656745291574",
    "78449529947736296467635114818367689712236683865634274594494527526361",
    "77293598314665656949832172525942378281876128575233442654182278832193",
    "83138893873384775659548637662867572687198263688597865118173921615178",
    "16544213398736238272144484495271559295574473987367783884769398237969",
    "6776",
);

/// Day 2 spreadsheet rows.
pub const SPREADSHEET: &str = "\
6046 6349    208 276 4643    1085    1539    4986    7006    5374    252 4751    226 6757    7495    2923
1432    1538    1761    1658    104 826 806 109 939 886 1497    280 1412    127 1651    156
244 1048    133 232 226 1072    883 1045    1130    252 1038    1022    471 70  1222    957
87  172 93  73  67  192 249 239 155 23  189 106 55  174 181 116
5871    204 6466    6437    5716    232 1513    7079    6140    268 350 6264    6420    3904    272 5565
1093    838 90  1447    1224    744 1551    59  328 1575    1544    1360    71  1583    75  370
213 166 7601    6261    247 210 4809    6201    6690    6816    7776    2522    5618    580 2236    3598
92  168 96  132 196 157 116 94  253 128 60  167 192 156 76  148
187 111 141 143 45  132 140 402 134 227 342 276 449 148 170 348
1894    1298    1531    1354    1801    974 85  93  1712    130 1705    110 314 107 449 350
1662    1529    784 1704    1187    83  422 146 147 1869    1941    110 525 1293    158 1752
162 1135    3278    1149    3546    3686    182 149 119 1755    3656    2126    244 3347    157 865
2049    6396    4111    6702    251 669 1491    245 210 4314    6265    694 5131    228 6195    6090
458 448 324 235 69  79  94  78  515 68  380 64  440 508 503 452
198 216 5700    4212    2370    143 5140    190 4934    539 5054    3707    6121    5211    549 2790
3021    3407    218 1043    449 214 1594    3244    3097    286 114 223 1214    3102    257 3345
";

/// Day 3 square to carry data from.
pub const SPIRAL_SQUARE: &str = "368078";
